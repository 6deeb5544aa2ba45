//! Task emission: the ordered subsequence of tasks out of a reconstructed tree.

use serde::Serialize;

use super::{InclusionFilter, ListDescriptor, ListTree, NodeId, NodeRef, Reporter, SourceContext, StatusType, TaskPayload};
use crate::TasksFile;

/// Ids of every task node, in ascending line order.
///
/// Plain list items are skipped, but emitted ids still point into the full tree, so a task's parent
/// may be a list item and its children may include list items.
pub fn emit_tasks(tree: &ListTree) -> Vec<NodeId> {
	tree.nodes().filter(|node| node.is_task()).map(|node| node.id()).collect()
}

/// Tasks of one document, with the tree and file they were read from.
#[derive(Clone, Debug)]
pub struct TaskList {
	file: TasksFile,
	tree: ListTree,
	tasks: Vec<NodeId>,
}

/// Rebuild the list tree of `content` and emit its tasks.
pub fn read_tasks(file: TasksFile, content: &str, list_items: &[ListDescriptor], filter: &InclusionFilter, reporter: &mut impl Reporter) -> TaskList {
	let ctx = SourceContext::new(file.path(), content);
	let tree = ListTree::build(&ctx, list_items, filter, reporter);
	let tasks = emit_tasks(&tree);
	tracing::debug!("[emit] {}: {} tasks out of {} list lines", file.path(), tasks.len(), tree.len());
	TaskList { file, tree, tasks }
}

impl TaskList {
	pub fn file(&self) -> &TasksFile {
		&self.file
	}

	pub fn tree(&self) -> &ListTree {
		&self.tree
	}

	pub fn len(&self) -> usize {
		self.tasks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tasks.is_empty()
	}

	pub fn ids(&self) -> &[NodeId] {
		&self.tasks
	}

	/// Tasks in line order.
	pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
		self.tasks.iter().map(|&id| NodeRef::new(&self.tree, id))
	}

	pub fn summaries(&self) -> Vec<TaskSummary> {
		self.iter().filter_map(TaskSummary::from_node).collect()
	}
}

/// Flat, serializable view of one task.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TaskSummary {
	pub line: usize,
	pub status: char,
	pub status_type: StatusType,
	pub description: String,
	/// Line of the direct parent, task or not.
	pub parent: Option<usize>,
	pub payload: TaskPayload,
}

impl TaskSummary {
	/// `None` for plain list items.
	pub fn from_node(node: NodeRef<'_>) -> Option<Self> {
		let task = node.task()?;
		Some(Self {
			line: node.line(),
			status: task.status.as_char(),
			status_type: task.status.status_type(),
			description: node.description().to_string(),
			parent: node.parent().map(|p| p.line()),
			payload: task.payload.clone(),
		})
	}
}
