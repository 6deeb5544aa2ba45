//! Inclusion filter deciding which checkbox lines are tasks.

/// Optional global filter, e.g. `#task`.
/// Without one, every checkbox line is a task.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InclusionFilter {
	token: Option<String>,
	remove_from_description: bool,
}

impl InclusionFilter {
	/// Blank tokens mean "no filter".
	pub fn new(token: Option<&str>, remove_from_description: bool) -> Self {
		let token = token.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string);
		let remove_from_description = remove_from_description && token.is_some();
		Self { token, remove_from_description }
	}

	/// Every checkbox line is a task.
	pub fn none() -> Self {
		Self::default()
	}

	pub fn token(&self) -> Option<&str> {
		self.token.as_deref()
	}

	/// Whether a checkbox line with this description becomes a task.
	pub fn includes(&self, description: &str) -> bool {
		let Some(token) = &self.token else {
			return true;
		};
		description.split_whitespace().any(|word| Self::word_matches(token, word))
	}

	/// Description as a task should expose it.
	/// With removal enabled, each standalone filter token is dropped together with the whitespace
	/// separating it from the next word (or the previous one, at the end). Other spacing is kept.
	pub fn apply(&self, description: &str) -> String {
		let token = match &self.token {
			Some(token) if self.remove_from_description => token.as_str(),
			_ => return description.to_string(),
		};

		let mut kept = String::with_capacity(description.len());
		let mut cursor = 0;
		for (start, _) in description.match_indices(token) {
			let end = start + token.len();
			let (before, after) = (&description[..start], &description[end..]);
			let standalone = before.chars().next_back().is_none_or(char::is_whitespace) && after.chars().next().is_none_or(char::is_whitespace);
			if !standalone || start < cursor {
				continue;
			}

			let rest = after.trim_start();
			let (remove_start, remove_end) = if rest.is_empty() {
				(start - (before.len() - before.trim_end().len()), description.len())
			} else {
				(start, description.len() - rest.len())
			};
			let remove_start = remove_start.max(cursor);
			kept.push_str(&description[cursor..remove_start]);
			cursor = remove_end;
		}
		kept.push_str(&description[cursor..]);
		kept.trim().to_string()
	}

	fn word_matches(token: &str, word: &str) -> bool {
		if word == token {
			return true;
		}
		// `#task/sub` is a nested tag under `#task`
		token.starts_with('#') && word.strip_prefix(token).is_some_and(|rest| rest.starts_with('/'))
	}
}
