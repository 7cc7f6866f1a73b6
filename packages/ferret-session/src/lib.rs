//! Interactive narrowing of a record snapshot.
//!
//! A [`FilterSession`] owns an immutable snapshot for its whole lifetime and turns each input
//! line into exactly one step: update the filter, clear it, select a shown record, or go back.

mod error;
mod visible;

pub use error::{Error, Result};
pub use visible::{VisibleSet, visible_positions};

use ferret_domain::SearchableRecord;

/// Maximum number of records shown per step.
pub const MAX_RESULTS: usize = 50;

const GO_BACK: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
	Displaying,
	Terminated,
}

#[derive(Debug)]
pub enum SelectionOutcome<'a, T> {
	Selected(&'a SearchableRecord<T>),
	GoBack,
	Continue(VisibleSet<'a, T>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input<'a> {
	GoBack,
	Clear,
	Index(&'a str),
	Filter(&'a str),
}
impl<'a> Input<'a> {
	/// Any all-digits line is a selection index, even when a record name is numeric.
	fn classify(line: &'a str) -> Self {
		if line == GO_BACK {
			Self::GoBack
		} else if line.is_empty() {
			Self::Clear
		} else if line.bytes().all(|byte| byte.is_ascii_digit()) {
			Self::Index(line)
		} else {
			Self::Filter(line)
		}
	}
}

#[derive(Debug)]
pub struct FilterSession<T> {
	snapshot: Vec<SearchableRecord<T>>,
	filter: String,
	visible: Vec<usize>,
	state: SessionState,
}
impl<T> FilterSession<T> {
	/// Captures `snapshot` and shows its unfiltered head.
	pub fn start<I>(snapshot: I) -> Self
	where
		I: IntoIterator<Item = SearchableRecord<T>>,
	{
		let snapshot: Vec<_> = snapshot.into_iter().collect();
		let visible = visible_positions(&snapshot, "");

		tracing::debug!(snapshot = snapshot.len(), visible = visible.len(), "Filter session started.");

		Self { snapshot, filter: String::new(), visible, state: SessionState::Displaying }
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn snapshot_len(&self) -> usize {
		self.snapshot.len()
	}

	pub fn visible(&self) -> VisibleSet<'_, T> {
		VisibleSet::new(&self.snapshot, &self.visible, &self.filter)
	}

	/// Applies one input line.
	///
	/// An out-of-range index is returned as an error and leaves the session untouched.
	pub fn step(&mut self, line: &str) -> Result<SelectionOutcome<'_, T>> {
		if self.state == SessionState::Terminated {
			return Err(Error::Terminated);
		}

		match Input::classify(line) {
			Input::GoBack => {
				self.state = SessionState::Terminated;

				tracing::info!(filter = %self.filter, "Filter session closed without a selection.");

				Ok(SelectionOutcome::GoBack)
			},
			Input::Clear => Ok(SelectionOutcome::Continue(self.apply_filter(""))),
			Input::Index(raw) => {
				let position = self.resolve(raw)?;

				self.state = SessionState::Terminated;

				tracing::info!(filter = %self.filter, position, "Filter session selected a record.");

				Ok(SelectionOutcome::Selected(&self.snapshot[position]))
			},
			Input::Filter(text) => Ok(SelectionOutcome::Continue(self.apply_filter(text))),
		}
	}

	/// Replaces the filter text verbatim, without treating digits as a selection.
	pub fn apply_filter(&mut self, filter: &str) -> VisibleSet<'_, T> {
		filter.clone_into(&mut self.filter);

		self.visible = visible_positions(&self.snapshot, &self.filter);

		tracing::debug!(filter = %self.filter, visible = self.visible.len(), "Filter applied.");

		self.visible()
	}

	/// Maps a 1-based display index onto a snapshot position using the current view.
	fn resolve(&self, raw: &str) -> Result<usize> {
		raw.parse::<usize>()
			.ok()
			.and_then(|index| index.checked_sub(1))
			.and_then(|offset| self.visible.get(offset).copied())
			.ok_or_else(|| {
				tracing::debug!(input = raw, visible = self.visible.len(), "Selection out of range.");

				Error::OutOfRangeSelection { input: raw.to_string(), visible: self.visible.len() }
			})
	}
}

#[cfg(test)]
mod tests {
	use super::Input;

	#[test]
	fn classifies_input_lines() {
		assert_eq!(Input::classify("0"), Input::GoBack);
		assert_eq!(Input::classify(""), Input::Clear);
		assert_eq!(Input::classify("12"), Input::Index("12"));
		assert_eq!(Input::classify("00"), Input::Index("00"));
		assert_eq!(Input::classify("2024"), Input::Index("2024"));
		assert_eq!(Input::classify("a1"), Input::Filter("a1"));
		assert_eq!(Input::classify(" 1"), Input::Filter(" 1"));
		assert_eq!(Input::classify("-1"), Input::Filter("-1"));
		assert_eq!(Input::classify("٣"), Input::Filter("٣"));
	}
}
