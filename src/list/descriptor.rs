//! Externally supplied nesting descriptors.

use serde::{Deserialize, Deserializer, Serialize};

/// One list line's nesting, as reported by a structure analyzer.
///
/// Line numbers are 0-based. `parent` is `None` when the item is not nested under another list item.
/// On the wire the sentinel may also be any negative integer, the convention of analyzers that
/// encode a root item's parent as the negated line of its list's first line.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, derive_new::new)]
pub struct ListDescriptor {
	pub line: usize,
	#[serde(default, deserialize_with = "parent_line")]
	pub parent: Option<usize>,
}

impl ListDescriptor {
	pub fn root(line: usize) -> Self {
		Self { line, parent: None }
	}

	pub fn child(line: usize, parent: usize) -> Self {
		Self { line, parent: Some(parent) }
	}
}

fn parent_line<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
	let raw = Option::<i64>::deserialize(deserializer)?;
	Ok(raw.and_then(|line| usize::try_from(line).ok()))
}
