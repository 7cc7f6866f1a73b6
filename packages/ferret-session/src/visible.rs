use ferret_domain::{FilterQuery, SearchableRecord};

use crate::MAX_RESULTS;

/// Snapshot positions shown for `filter`, in snapshot order, capped at [`MAX_RESULTS`].
///
/// An empty filter shows the head of the snapshot without consulting the predicate.
pub fn visible_positions<T>(snapshot: &[SearchableRecord<T>], filter: &str) -> Vec<usize> {
	if filter.is_empty() {
		return (0..snapshot.len().min(MAX_RESULTS)).collect();
	}

	let query = FilterQuery::new(filter);

	snapshot
		.iter()
		.enumerate()
		.filter(|(_, record)| query.matches(record))
		.map(|(position, _)| position)
		.take(MAX_RESULTS)
		.collect()
}

/// The records shown to the operator for one step.
///
/// Display indices are 1-based and only meaningful until the next step.
#[derive(Debug)]
pub struct VisibleSet<'a, T> {
	snapshot: &'a [SearchableRecord<T>],
	positions: &'a [usize],
	filter: &'a str,
}
impl<'a, T> VisibleSet<'a, T> {
	pub(crate) fn new(
		snapshot: &'a [SearchableRecord<T>],
		positions: &'a [usize],
		filter: &'a str,
	) -> Self {
		Self { snapshot, positions, filter }
	}

	pub fn filter(&self) -> &'a str {
		self.filter
	}

	/// Distinguishes a filtered view from the default head of the snapshot.
	pub fn is_filtered(&self) -> bool {
		!self.filter.is_empty()
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn get(&self, display_index: usize) -> Option<&'a SearchableRecord<T>> {
		let position = *self.positions.get(display_index.checked_sub(1)?)?;

		self.snapshot.get(position)
	}

	/// Records paired with their 1-based display index.
	pub fn iter(self) -> impl Iterator<Item = (usize, &'a SearchableRecord<T>)> {
		let snapshot = self.snapshot;

		self.positions
			.iter()
			.enumerate()
			.map(move |(offset, position)| (offset + 1, &snapshot[*position]))
	}

	pub fn values(self) -> impl Iterator<Item = &'a T> {
		self.iter().map(|(_, record)| record.value())
	}
}
impl<T> Clone for VisibleSet<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<T> Copy for VisibleSet<'_, T> {}
