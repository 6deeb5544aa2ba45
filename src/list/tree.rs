//! Arena-backed list tree and the linking pass that builds it.
//!
//! The tree owns every node by value. `parent` and `children` are indices into the same arena,
//! so navigation is O(1) both ways and there are no reference cycles to manage.

use std::collections::HashMap;

use super::{InclusionFilter, ListDescriptor, NodeRef, NodeRegistry, Reporter, SourceContext, StatusSymbol, TaskPayload};

/// Index of a node inside its [`ListTree`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, derive_more::Display)]
#[display("#{_0}")]
pub struct NodeId(pub(crate) usize);

/// Task-specific part of a node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskData {
	pub status: StatusSymbol,
	pub payload: TaskPayload,
}

/// What a list line turned out to be.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
	Task(TaskData),
	/// Plain item. Checkbox lines rejected by the inclusion filter keep their symbol here.
	ListItem { status: Option<StatusSymbol> },
}

/// One list line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListNode {
	/// 0-based source line
	pub line: usize,
	/// The line exactly as written, quote markers and indentation included.
	pub original_markdown: String,
	/// Text after the bullet and checkbox.
	pub description: String,
	pub kind: NodeKind,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
}

impl ListNode {
	pub(crate) fn new(line: usize, original_markdown: String, description: String, kind: NodeKind) -> Self {
		Self {
			line,
			original_markdown,
			description,
			kind,
			parent: None,
			children: Vec::new(),
		}
	}

	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}

	/// Children in ascending line order.
	pub fn children(&self) -> &[NodeId] {
		&self.children
	}

	pub fn is_task(&self) -> bool {
		matches!(self.kind, NodeKind::Task(_))
	}

	pub fn task(&self) -> Option<&TaskData> {
		match &self.kind {
			NodeKind::Task(task) => Some(task),
			NodeKind::ListItem { .. } => None,
		}
	}

	/// Checkbox symbol, for tasks and for filtered-out checkbox items alike.
	pub fn status(&self) -> Option<StatusSymbol> {
		match &self.kind {
			NodeKind::Task(task) => Some(task.status),
			NodeKind::ListItem { status } => *status,
		}
	}

	pub fn kind_name(&self) -> &'static str {
		match self.kind {
			NodeKind::Task(_) => "Task",
			NodeKind::ListItem { .. } => "ListItem",
		}
	}
}

/// Parent/child tree of every list line in one document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListTree {
	nodes: Vec<ListNode>,
	by_line: HashMap<usize, NodeId>,
	roots: Vec<NodeId>,
}

impl ListTree {
	/// Register every descriptor's line, then link the nodes.
	pub fn build(ctx: &SourceContext<'_>, descriptors: &[ListDescriptor], filter: &InclusionFilter, reporter: &mut impl Reporter) -> Self {
		let registry = NodeRegistry::register(ctx, descriptors, filter, reporter);
		Self::link(registry, ctx, reporter)
	}

	/// Resolve each node's parent reference against the registry.
	///
	/// - no parent: root
	/// - a registered line before the node: child of that node, appended in line order
	/// - a line that is not registered (heading, prose, skipped descriptor): root
	/// - a line at or after the node: reported, then root
	pub fn link(registry: NodeRegistry, ctx: &SourceContext<'_>, reporter: &mut impl Reporter) -> Self {
		let NodeRegistry { mut nodes, by_line, parent_refs } = registry;
		let mut roots = Vec::new();

		// Registration order is ascending by line, so pushing children keeps them sorted.
		for (index, parent_ref) in parent_refs.into_iter().enumerate() {
			let id = NodeId(index);
			let line = nodes[index].line;

			let parent = match parent_ref {
				None => None,
				Some(parent_line) if parent_line >= line => {
					tracing::warn!("[link] {}: line {line} names later line {parent_line} as parent", ctx.path);
					reporter.report(ctx.parent_after_child(line, parent_line));
					None
				}
				Some(parent_line) => {
					let found = by_line.get(&parent_line).copied();
					if found.is_none() {
						tracing::debug!("[link] line {line}: parent line {parent_line} is not a list item, demoting to root");
					}
					found
				}
			};

			match parent {
				Some(parent_id) => {
					nodes[index].parent = Some(parent_id);
					nodes[parent_id.0].children.push(id);
				}
				None => roots.push(id),
			}
		}

		tracing::debug!("[link] {}: {} nodes, {} roots", ctx.path, nodes.len(), roots.len());
		Self { nodes, by_line, roots }
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
		(id.0 < self.nodes.len()).then_some(NodeRef::new(self, id))
	}

	/// Ids reaching here come from a [`NodeRef`] of this tree.
	pub(crate) fn node(&self, id: NodeId) -> &ListNode {
		&self.nodes[id.0]
	}

	pub fn at_line(&self, line: usize) -> Option<NodeRef<'_>> {
		self.by_line.get(&line).map(|&id| NodeRef::new(self, id))
	}

	/// Every node, in ascending line order.
	pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
		(0..self.nodes.len()).map(|index| NodeRef::new(self, NodeId(index)))
	}

	/// Nodes without a parent, in ascending line order.
	pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
		self.roots.iter().map(|&id| NodeRef::new(self, id))
	}

	/// `(line, parent line, child lines)` for every node: the tree's structure without its content.
	pub fn shape(&self) -> Vec<(usize, Option<usize>, Vec<usize>)> {
		self.nodes
			.iter()
			.map(|node| {
				let parent = node.parent.map(|p| self.nodes[p.0].line);
				let children = node.children.iter().map(|c| self.nodes[c.0].line).collect();
				(node.line, parent, children)
			})
			.collect()
	}

	/// Render a subtree, one node per line: four spaces per depth, the trimmed source line and its kind.
	///
	/// `None` if `id` does not belong to this tree.
	pub fn render(&self, id: NodeId) -> Option<String> {
		self.nodes.get(id.0)?;
		let mut lines = Vec::new();
		self.render_into(id, 0, &mut lines);
		Some(lines.join("\n"))
	}

	/// Render every root's subtree.
	pub fn render_roots(&self) -> String {
		self.render_all(self.roots.iter().copied())
	}

	/// Render the subtrees of the given nodes that are roots, skipping nodes with a parent and ids foreign to this tree.
	pub fn render_all(&self, ids: impl IntoIterator<Item = NodeId>) -> String {
		let mut lines = Vec::new();
		for id in ids {
			if self.nodes.get(id.0).is_some_and(|node| node.parent.is_none()) {
				self.render_into(id, 0, &mut lines);
			}
		}
		lines.join("\n")
	}

	fn render_into(&self, id: NodeId, depth: usize, lines: &mut Vec<String>) {
		let node = &self.nodes[id.0];
		lines.push(format!("{}{} : {}", " ".repeat(depth * 4), node.original_markdown.trim(), node.kind_name()));
		for &child in &node.children {
			self.render_into(child, depth + 1, lines);
		}
	}
}
