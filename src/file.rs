//! Read-only view of a document's path and frontmatter.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::DocumentMetadata;

/// Frontmatter properties, keyed by property name.
pub type Frontmatter = BTreeMap<String, Value>;

/// A document path plus whatever frontmatter is known for it.
///
/// Missing metadata (a file that was just created, or one without a YAML block) is an empty map,
/// never an error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TasksFile {
	path: String,
	frontmatter: Frontmatter,
}

impl TasksFile {
	pub fn new(path: impl Into<String>, frontmatter: Option<Frontmatter>) -> Self {
		Self {
			path: path.into(),
			frontmatter: frontmatter.unwrap_or_default(),
		}
	}

	pub fn from_metadata(path: impl Into<String>, metadata: Option<&DocumentMetadata>) -> Self {
		Self::new(path, metadata.and_then(|m| m.frontmatter.clone()))
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	/// Last path component: `a/b/note.md` -> `note.md`
	pub fn filename(&self) -> &str {
		self.path.rsplit_once('/').map_or(self.path.as_str(), |(_, name)| name)
	}

	/// `a/b/note.md` -> `note`
	pub fn filename_without_extension(&self) -> &str {
		let filename = self.filename();
		match filename.rsplit_once('.') {
			Some((stem, _)) if !stem.is_empty() => stem,
			_ => filename,
		}
	}

	/// Everything up to and including the last `/`, or `/` for files at the top level.
	pub fn folder(&self) -> &str {
		match self.path.rfind('/') {
			Some(index) => &self.path[..=index],
			None => "/",
		}
	}

	/// First path component with its trailing `/`, or `/` for files at the top level.
	pub fn root(&self) -> &str {
		match self.path.find('/') {
			Some(index) => &self.path[..=index],
			None => "/",
		}
	}

	pub fn frontmatter(&self) -> &Frontmatter {
		&self.frontmatter
	}

	pub fn property(&self, name: &str) -> Option<&Value> {
		self.frontmatter.get(name)
	}

	pub fn has_property(&self, name: &str) -> bool {
		self.frontmatter.contains_key(name)
	}

	/// `tags` property as a list; a single string counts as one tag.
	pub fn tags(&self) -> Vec<String> {
		match self.frontmatter.get("tags") {
			Some(Value::Array(items)) => items.iter().filter_map(|item| item.as_str().map(str::to_string)).collect(),
			Some(Value::String(tag)) => vec![tag.clone()],
			_ => Vec::new(),
		}
	}
}
