//! Line number -> node registration pass.

use std::collections::HashMap;

use super::{
	Anomaly, Classification, InclusionFilter, ListDescriptor, Reporter, SourceContext, TaskPayload, classify_line,
	tree::{ListNode, NodeId, NodeKind, TaskData},
};

/// Every node of one document, keyed by its line, with parent references still unresolved.
#[derive(Debug, Default)]
pub struct NodeRegistry {
	pub(super) nodes: Vec<ListNode>,
	pub(super) by_line: HashMap<usize, NodeId>,
	/// Parent line each node's descriptor named, indexed like `nodes`.
	pub(super) parent_refs: Vec<Option<usize>>,
}

impl NodeRegistry {
	/// Classify the line of every descriptor and create its node.
	///
	/// Descriptors are processed in ascending line order regardless of how they were supplied.
	/// Descriptors pointing past the end of the document, at a non-list line, or at an already
	/// registered line are skipped and reported.
	pub fn register(ctx: &SourceContext<'_>, descriptors: &[ListDescriptor], filter: &InclusionFilter, reporter: &mut impl Reporter) -> Self {
		let lines: Vec<&str> = ctx.content.lines().collect();
		let mut ordered = descriptors.to_vec();
		ordered.sort_by_key(|d| d.line);

		let mut registry = Self {
			nodes: Vec::with_capacity(ordered.len()),
			by_line: HashMap::with_capacity(ordered.len()),
			parent_refs: Vec::with_capacity(ordered.len()),
		};

		for descriptor in ordered {
			let Some(&raw) = lines.get(descriptor.line) else {
				tracing::warn!("[registry] {}: descriptor line {} out of range ({} lines)", ctx.path, descriptor.line, lines.len());
				reporter.report(Anomaly::LineOutOfRange {
					path: ctx.path.to_string(),
					line: descriptor.line,
					line_count: lines.len(),
				});
				continue;
			};

			if registry.by_line.contains_key(&descriptor.line) {
				tracing::warn!("[registry] {}: duplicate descriptor for line {}", ctx.path, descriptor.line);
				reporter.report(ctx.duplicate_descriptor(descriptor.line));
				continue;
			}

			let Some(node) = Self::make_node(descriptor.line, raw, filter) else {
				tracing::warn!("[registry] {}: line {} is not a list line: {raw:?}", ctx.path, descriptor.line);
				reporter.report(ctx.not_a_list_line(descriptor.line));
				continue;
			};

			tracing::debug!("[registry] line {} -> {} {:?}", node.line, node.kind_name(), node.description);
			let id = NodeId(registry.nodes.len());
			registry.by_line.insert(node.line, id);
			registry.nodes.push(node);
			registry.parent_refs.push(descriptor.parent);
		}

		registry
	}

	fn make_node(line: usize, raw: &str, filter: &InclusionFilter) -> Option<ListNode> {
		let (description, kind) = match classify_line(raw) {
			Classification::Task { status, description } if filter.includes(description) => {
				let payload = TaskPayload::parse(description);
				(filter.apply(description), NodeKind::Task(TaskData { status, payload }))
			}
			// Checkbox lines the filter rejects stay in the tree as plain items
			Classification::Task { status, description } => (description.to_string(), NodeKind::ListItem { status: Some(status) }),
			Classification::ListItem { description } => (description.to_string(), NodeKind::ListItem { status: None }),
			Classification::NotAListItem => return None,
		};
		Some(ListNode::new(line, raw.to_string(), description, kind))
	}

	/// Node registered for a line, if any.
	pub fn get(&self, line: usize) -> Option<NodeId> {
		self.by_line.get(&line).copied()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
