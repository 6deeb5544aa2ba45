//! Rebuild the list/task tree of a markdown note.
//!
//! Input is a document's text plus one [`ListDescriptor`] per list line (usually from
//! [`DocumentMetadata::analyze`], or from any other structure analyzer). Output is a [`TaskList`]:
//! the document's tasks in line order, each still linked into the full tree of list items.

pub mod config;
pub mod file;
pub mod list;
pub mod outline;

pub use config::{Settings, SettingsError};
pub use file::{Frontmatter, TasksFile};
// Re-export all public types from list module at crate root for convenience
pub use list::{
	Anomaly, Classification, Descendants, InclusionFilter, ListDescriptor, ListNode, ListTree, NodeId, NodeKind, NodeRef, NodeRegistry, Priority, Reporter, SourceContext, StatusSymbol,
	StatusType, TaskData, TaskDates, TaskList, TaskPayload, TaskSummary, classify_line, emit_tasks, marker_prefix, read_tasks,
};
pub use outline::DocumentMetadata;

/// Analyze `content` and read its tasks in one go.
pub fn read_document(path: &str, content: &str, filter: &InclusionFilter, reporter: &mut impl Reporter) -> TaskList {
	let metadata = DocumentMetadata::analyze(content);
	let file = TasksFile::from_metadata(path, Some(&metadata));
	read_tasks(file, content, &metadata.list_items, filter, reporter)
}
