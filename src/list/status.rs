//! Checkbox status symbols.
//!
//! A checkbox line carries exactly one symbol between its brackets. The symbol is kept verbatim
//! (custom statuses round-trip untouched); its meaning is derived on demand.

use serde::{Deserialize, Serialize};

/// What a status symbol means for completion.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
	/// `- [ ]`, and any symbol nobody assigned a meaning to
	#[default]
	#[display("todo")]
	Todo,
	/// `- [/]`
	#[display("in progress")]
	InProgress,
	/// `- [x]` or `- [X]`
	#[display("done")]
	Done,
	/// `- [-]`
	#[display("cancelled")]
	Cancelled,
}

/// The single character found between the brackets of a checkbox.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct StatusSymbol(pub char);

impl StatusSymbol {
	pub const TODO: Self = Self(' ');
	pub const DONE: Self = Self('x');

	/// Parse from checkbox content (the text inside `[ ]`).
	/// Only a single character is a valid symbol; `[]` and `[ab]` are not checkboxes.
	pub fn from_checkbox(content: &str) -> Option<Self> {
		let mut chars = content.chars();
		let symbol = chars.next()?;
		if chars.next().is_some() || symbol == '[' || symbol == ']' {
			return None;
		}
		Some(Self(symbol))
	}

	pub fn as_char(self) -> char {
		self.0
	}

	pub fn status_type(self) -> StatusType {
		match self.0 {
			'x' | 'X' => StatusType::Done,
			'/' => StatusType::InProgress,
			'-' => StatusType::Cancelled,
			_ => StatusType::Todo,
		}
	}

	/// Done or cancelled: nothing left to do.
	pub fn is_done(self) -> bool {
		matches!(self.status_type(), StatusType::Done | StatusType::Cancelled)
	}

	/// Convert to checkbox text for serialization
	pub fn to_checkbox(self) -> String {
		format!("[{}]", self.0)
	}
}

impl Default for StatusSymbol {
	fn default() -> Self {
		Self::TODO
	}
}
