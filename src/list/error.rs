//! Anomalies found while rebuilding a list tree.
//!
//! None of these abort a reconstruction. Each one is handed to a [`Reporter`] exactly once and the
//! offending descriptor is skipped or its node demoted to a root.
//! Uses miette for rich diagnostics with source code spans.

#![allow(unused_assignments)] // Fields are read by miette's derive macro via attributes

use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};

/// A recoverable problem with the descriptors of one document.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum Anomaly {
	#[error("{path}: list descriptor for line {line} is past the end of the document ({line_count} lines)")]
	#[diagnostic(
		code(mdtasks::descriptor::out_of_range),
		help("the structure description is stale; re-run the analyzer on the current content")
	)]
	LineOutOfRange { path: String, line: usize, line_count: usize },

	#[error("{path}: list descriptor for line {line} does not point at a list line")]
	#[diagnostic(code(mdtasks::descriptor::not_a_list_line), help("only bullet lines (`-`, `*`, `+`, `1.`, `1)`) become list items"))]
	NotAListLine {
		#[source_code]
		src: NamedSource<Arc<str>>,
		#[label("expected a list bullet here")]
		span: SourceSpan,
		path: String,
		line: usize,
	},

	#[error("{path}: duplicate list descriptor for line {line}")]
	#[diagnostic(code(mdtasks::descriptor::duplicate), help("only the first descriptor of a line is used"))]
	DuplicateDescriptor {
		#[source_code]
		src: NamedSource<Arc<str>>,
		#[label("described more than once")]
		span: SourceSpan,
		path: String,
		line: usize,
	},

	#[error("{path}: line {line} names line {parent} as its parent, which does not precede it")]
	#[diagnostic(code(mdtasks::descriptor::parent_after_child), help("parents always appear before their children; the item was made a root"))]
	ParentAfterChild {
		#[source_code]
		src: NamedSource<Arc<str>>,
		#[label("this item")]
		span: SourceSpan,
		path: String,
		line: usize,
		parent: usize,
	},
}

impl Anomaly {
	/// 0-based line the anomaly is about.
	pub fn line(&self) -> usize {
		match self {
			Anomaly::LineOutOfRange { line, .. } | Anomaly::NotAListLine { line, .. } | Anomaly::DuplicateDescriptor { line, .. } | Anomaly::ParentAfterChild { line, .. } => *line,
		}
	}

	pub fn path(&self) -> &str {
		match self {
			Anomaly::LineOutOfRange { path, .. } | Anomaly::NotAListLine { path, .. } | Anomaly::DuplicateDescriptor { path, .. } | Anomaly::ParentAfterChild { path, .. } => path,
		}
	}
}

/// Receives every anomaly of a reconstruction.
pub trait Reporter {
	fn report(&mut self, anomaly: Anomaly);
}

impl<F: FnMut(Anomaly)> Reporter for F {
	fn report(&mut self, anomaly: Anomaly) {
		self(anomaly)
	}
}

impl Reporter for Vec<Anomaly> {
	fn report(&mut self, anomaly: Anomaly) {
		self.push(anomaly);
	}
}

/// Holds source content and path for error reporting.
///
/// The content is copied once into a shared buffer; every anomaly points at that same buffer.
#[derive(Clone, Debug)]
pub struct SourceContext<'a> {
	pub path: &'a str,
	pub content: &'a str,
	shared: Arc<str>,
	line_starts: Vec<usize>,
}

impl<'a> SourceContext<'a> {
	pub fn new(path: &'a str, content: &'a str) -> Self {
		let mut line_starts = vec![0];
		let mut offset = 0;
		for line in content.split_inclusive('\n') {
			offset += line.len();
			line_starts.push(offset);
		}
		Self {
			path,
			content,
			shared: Arc::from(content),
			line_starts,
		}
	}

	/// Create a NamedSource for miette diagnostics.
	pub fn named_source(&self) -> NamedSource<Arc<str>> {
		NamedSource::new(self.path, Arc::clone(&self.shared))
	}

	/// Buffer shared by every anomaly built from this context.
	pub fn shared_source(&self) -> &Arc<str> {
		&self.shared
	}

	/// Get span for an entire line (0-based), without its line ending.
	pub fn line_span(&self, line: usize) -> SourceSpan {
		let start = self.line_starts.get(line).copied().unwrap_or(self.content.len()).min(self.content.len());
		let end = self.line_starts.get(line + 1).copied().unwrap_or(self.content.len()).min(self.content.len());
		let text = &self.content[start..end];
		let len = text.trim_end_matches(['\n', '\r']).len();
		(start, len).into()
	}

	pub fn not_a_list_line(&self, line: usize) -> Anomaly {
		Anomaly::NotAListLine {
			src: self.named_source(),
			span: self.line_span(line),
			path: self.path.to_string(),
			line,
		}
	}

	pub fn duplicate_descriptor(&self, line: usize) -> Anomaly {
		Anomaly::DuplicateDescriptor {
			src: self.named_source(),
			span: self.line_span(line),
			path: self.path.to_string(),
			line,
		}
	}

	pub fn parent_after_child(&self, line: usize, parent: usize) -> Anomaly {
		Anomaly::ParentAfterChild {
			src: self.named_source(),
			span: self.line_span(line),
			path: self.path.to_string(),
			line,
			parent,
		}
	}
}
