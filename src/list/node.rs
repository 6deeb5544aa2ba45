//! Borrowed navigation handle over a [`ListTree`].

use std::fmt;

use super::{ListNode, ListTree, NodeId, StatusSymbol, TaskData};

/// A node together with the tree it lives in, so parents and children can be followed.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
	tree: &'a ListTree,
	id: NodeId,
}

impl<'a> NodeRef<'a> {
	pub(crate) fn new(tree: &'a ListTree, id: NodeId) -> Self {
		Self { tree, id }
	}

	pub fn id(&self) -> NodeId {
		self.id
	}

	pub fn tree(&self) -> &'a ListTree {
		self.tree
	}

	pub fn node(&self) -> &'a ListNode {
		self.tree.node(self.id)
	}

	pub fn line(&self) -> usize {
		self.node().line
	}

	pub fn original_markdown(&self) -> &'a str {
		&self.node().original_markdown
	}

	pub fn description(&self) -> &'a str {
		&self.node().description
	}

	pub fn status(&self) -> Option<StatusSymbol> {
		self.node().status()
	}

	pub fn is_task(&self) -> bool {
		self.node().is_task()
	}

	pub fn task(&self) -> Option<&'a TaskData> {
		self.node().task()
	}

	pub fn parent(&self) -> Option<NodeRef<'a>> {
		self.node().parent().map(|id| NodeRef::new(self.tree, id))
	}

	pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
		let tree = self.tree;
		self.node().children().iter().map(move |&id| NodeRef::new(tree, id))
	}

	/// Parent, grandparent, ... up to the root.
	pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
		std::iter::successors(self.parent(), |node| node.parent())
	}

	/// Every node below this one, pre-order.
	pub fn descendants(&self) -> Descendants<'a> {
		let mut stack: Vec<NodeId> = self.node().children().to_vec();
		stack.reverse();
		Descendants { tree: self.tree, stack }
	}

	/// Nearest ancestor that is a task, looking through plain list items.
	pub fn task_parent(&self) -> Option<NodeRef<'a>> {
		self.ancestors().find(|node| node.is_task())
	}

	/// Nearest task descendants: tasks reached without passing through another task.
	pub fn task_children(&self) -> Vec<NodeRef<'a>> {
		let mut found = Vec::new();
		self.collect_task_children(&mut found);
		found
	}

	fn collect_task_children(&self, found: &mut Vec<NodeRef<'a>>) {
		for child in self.children() {
			if child.is_task() {
				found.push(child);
			} else {
				child.collect_task_children(found);
			}
		}
	}
}

impl PartialEq for NodeRef<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.tree, other.tree) && self.id == other.id
	}
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NodeRef").field("id", &self.id).field("line", &self.line()).field("kind", &self.node().kind_name()).finish()
	}
}

/// Pre-order walk below a node.
pub struct Descendants<'a> {
	tree: &'a ListTree,
	stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
	type Item = NodeRef<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.stack.pop()?;
		self.stack.extend(self.tree.node(id).children().iter().rev());
		Some(NodeRef::new(self.tree, id))
	}
}
