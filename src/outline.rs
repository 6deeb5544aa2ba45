//! Reference structure analyzer: frontmatter and list descriptors straight from markdown text.
//!
//! The tree builder only trusts descriptors it is handed. This module produces them with a
//! CommonMark pass, so the binary and the tests can go from raw text to tasks on their own.

use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::{Frontmatter, ListDescriptor};

/// What a structure analyzer knows about one document.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DocumentMetadata {
	/// `None` without a YAML block, or when the block is empty or invalid.
	#[serde(default)]
	pub frontmatter: Option<Frontmatter>,
	/// One descriptor per list line, in order of appearance.
	#[serde(default, alias = "listItems")]
	pub list_items: Vec<ListDescriptor>,
}

impl DocumentMetadata {
	pub fn analyze(content: &str) -> Self {
		let mut options = Options::empty();
		options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
		options.insert(Options::ENABLE_TASKLISTS);
		options.insert(Options::ENABLE_STRIKETHROUGH);

		let line_offsets = line_offsets(content);
		let mut frontmatter = None;
		let mut in_metadata = false;
		let mut metadata_text = String::new();
		// Line of every list item currently open, innermost last
		let mut open_items: Vec<usize> = Vec::new();
		let mut list_items = Vec::new();

		for (event, range) in Parser::new_ext(content, options).into_offset_iter() {
			match event {
				Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => in_metadata = true,
				Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
					in_metadata = false;
					frontmatter = parse_frontmatter(&metadata_text);
				}
				Event::Text(text) if in_metadata => metadata_text.push_str(&text),
				Event::Start(Tag::Item) => {
					let line = line_of(content, &line_offsets, range.start);
					list_items.push(ListDescriptor::new(line, open_items.last().copied()));
					open_items.push(line);
				}
				Event::End(TagEnd::Item) => {
					open_items.pop();
				}
				_ => {}
			}
		}

		tracing::debug!("[outline] {} list items, frontmatter: {}", list_items.len(), frontmatter.is_some());
		Self { frontmatter, list_items }
	}
}

fn line_offsets(content: &str) -> Vec<usize> {
	std::iter::once(0).chain(content.match_indices('\n').map(|(i, _)| i + 1)).collect()
}

/// 0-based line containing `offset`.
fn line_of(content: &str, line_offsets: &[usize], offset: usize) -> usize {
	let mut line = match line_offsets.binary_search(&offset) {
		Ok(index) => index,
		Err(index) => index.saturating_sub(1),
	};
	// Nested items can be reported at the newline ending the previous line
	if content.as_bytes().get(offset) == Some(&b'\n') {
		line += 1;
	}
	line
}

fn parse_frontmatter(yaml: &str) -> Option<Frontmatter> {
	if yaml.trim().is_empty() {
		return None;
	}
	match serde_yaml::from_str::<Option<Frontmatter>>(yaml) {
		Ok(frontmatter) => frontmatter,
		Err(e) => {
			tracing::warn!("[outline] ignoring invalid frontmatter: {e}");
			None
		}
	}
}
