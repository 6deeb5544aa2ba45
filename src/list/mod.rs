//! List/task tree reconstruction.
//!
//! A document's list lines are rebuilt into a parent/child tree from two inputs: the raw text and
//! one [`ListDescriptor`] per list line. Lines are classified on their own, registered by line
//! number, linked to their parents, and finally the tasks are emitted in line order.

mod status;
pub use status::{StatusSymbol, StatusType};

mod classify;
pub use classify::{Classification, classify_line, marker_prefix};

mod payload;
pub use payload::{Priority, TaskDates, TaskPayload};

mod filter;
pub use filter::InclusionFilter;

mod descriptor;
pub use descriptor::ListDescriptor;

mod error;
pub use error::{Anomaly, Reporter, SourceContext};

mod registry;
pub use registry::NodeRegistry;

mod tree;
pub use tree::{ListNode, ListTree, NodeId, NodeKind, TaskData};

mod node;
pub use node::{Descendants, NodeRef};

mod emit;
pub use emit::{TaskList, TaskSummary, emit_tasks, read_tasks};
