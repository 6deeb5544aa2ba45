//! Lexical classification of a single source line.
//!
//! Classification never looks at neighbouring lines: nesting comes from the descriptors,
//! the line itself only says what kind of list line it is.

use std::sync::LazyLock;

use regex::Regex;

use super::StatusSymbol;

/// Leading run of whitespace and block-quote/callout markers, then a bullet (`-`, `*`, `+`, `1.`, `1)`),
/// then either the end of the line or whitespace followed by the item text.
static LIST_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([\s>]*)([-*+]|[0-9]+[.)])(?:[ \t]+(.*))?$").expect("list line pattern is valid"));

/// `[?]` with exactly one non-bracket symbol, then the description.
static CHECKBOX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[([^\[\]])\][ \t]*(.*)$").expect("checkbox pattern is valid"));

/// Outcome of classifying one raw line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Classification<'a> {
	/// `- [?] description`
	Task { status: StatusSymbol, description: &'a str },
	/// `- description` (any bullet without a bracketed status)
	ListItem { description: &'a str },
	/// Prose, headings, blank lines: invisible to the tree.
	NotAListItem,
}

impl Classification<'_> {
	pub fn is_task(&self) -> bool {
		matches!(self, Classification::Task { .. })
	}

	pub fn is_list_line(&self) -> bool {
		!matches!(self, Classification::NotAListItem)
	}
}

/// Classify a raw line.
/// Any run of `>` markers and indentation before the bullet is skipped here; callers keep the raw line.
pub fn classify_line(raw: &str) -> Classification<'_> {
	let Some(captures) = LIST_LINE.captures(raw) else {
		return Classification::NotAListItem;
	};
	let body = captures.get(3).map_or("", |m| m.as_str());

	if let Some(checkbox) = CHECKBOX.captures(body) {
		let symbol = checkbox.get(1).map_or("", |m| m.as_str());
		if let Some(status) = StatusSymbol::from_checkbox(symbol) {
			let description = checkbox.get(2).map_or("", |m| m.as_str()).trim();
			return Classification::Task { status, description };
		}
	}

	Classification::ListItem { description: body.trim() }
}

/// The block-quote/callout marker run and indentation preceding the bullet, verbatim.
/// Empty for lines that are not list lines.
pub fn marker_prefix(raw: &str) -> &str {
	LIST_LINE.captures(raw).and_then(|c| c.get(1)).map_or("", |m| m.as_str())
}
