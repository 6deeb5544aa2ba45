//! Task metadata carried alongside a checkbox line.
//!
//! Extraction is read-only: the description keeps every signifier, the payload is a parsed view of it.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Task priority, as set by the priority signifiers.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
	#[display("Highest")]
	Highest,
	#[display("High")]
	High,
	#[display("Medium")]
	Medium,
	/// No signifier present
	#[default]
	#[display("Normal")]
	None,
	#[display("Low")]
	Low,
	#[display("Lowest")]
	Lowest,
}

impl Priority {
	pub fn from_signifier(c: char) -> Option<Self> {
		match c {
			'🔺' => Some(Priority::Highest),
			'⏫' => Some(Priority::High),
			'🔼' => Some(Priority::Medium),
			'🔽' => Some(Priority::Low),
			'⏬' => Some(Priority::Lowest),
			_ => None,
		}
	}

	pub fn signifier(self) -> Option<char> {
		match self {
			Priority::Highest => Some('🔺'),
			Priority::High => Some('⏫'),
			Priority::Medium => Some('🔼'),
			Priority::None => None,
			Priority::Low => Some('🔽'),
			Priority::Lowest => Some('⏬'),
		}
	}
}

/// Dates attached to a task. Every field is independent.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TaskDates {
	pub due: Option<Date>,
	pub scheduled: Option<Date>,
	pub start: Option<Date>,
	pub created: Option<Date>,
	pub done: Option<Date>,
	pub cancelled: Option<Date>,
}

/// Task-specific data parsed out of a description when the line is classified.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TaskPayload {
	pub priority: Priority,
	pub dates: TaskDates,
	/// Raw recurrence rule text following `🔁`
	pub recurrence: Option<String>,
	pub tags: Vec<String>,
}

static DATE_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(📅|⏳|🛫|➕|✅|❌)\s*(\d{4}-\d{2}-\d{2})").expect("date field pattern is valid"));
static RECURRENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"🔁\s*([^📅⏳🛫➕✅❌🔺⏫🔼🔽⏬]*)").expect("recurrence pattern is valid"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:^|\s)(#[^\s#]+)").expect("tag pattern is valid"));

impl TaskPayload {
	pub fn parse(description: &str) -> Self {
		let priority = description.chars().find_map(Priority::from_signifier).unwrap_or_default();

		let mut dates = TaskDates::default();
		for captures in DATE_FIELD.captures_iter(description) {
			let Ok(date) = captures[2].parse::<Date>() else {
				tracing::debug!("[payload] ignoring unparseable date {:?}", &captures[2]);
				continue;
			};
			let slot = match &captures[1] {
				"📅" => &mut dates.due,
				"⏳" => &mut dates.scheduled,
				"🛫" => &mut dates.start,
				"➕" => &mut dates.created,
				"✅" => &mut dates.done,
				_ => &mut dates.cancelled,
			};
			slot.get_or_insert(date);
		}

		let recurrence = RECURRENCE
			.captures(description)
			.map(|c| c[1].trim().to_string())
			.filter(|rule| !rule.is_empty());

		let tags = TAG.captures_iter(description).map(|c| c[1].to_string()).collect();

		Self { priority, dates, recurrence, tags }
	}
}
