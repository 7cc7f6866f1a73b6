use crate::{
	normalize::{self, ComparisonKey},
	record::{SearchField, SearchableRecord},
};

/// A filter string prepared once so that it can be tested against many records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterQuery {
	raw: String,
	lowered: String,
	key: ComparisonKey,
}
impl FilterQuery {
	pub fn new(filter: &str) -> Self {
		Self { raw: filter.to_string(), lowered: filter.to_lowercase(), key: normalize::key(filter) }
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// A field matches on raw case-insensitive containment or on comparison-key containment.
	///
	/// The raw check keeps exact matches working for text whose key loses information.
	pub fn matches_field(&self, field: &SearchField) -> bool {
		field.lowered().contains(self.lowered.as_str()) || field.key().contains(&self.key)
	}

	pub fn matches<T>(&self, record: &SearchableRecord<T>) -> bool {
		record.fields().any(|field| self.matches_field(field))
	}
}

pub fn matches<T>(record: &SearchableRecord<T>, filter: &str) -> bool {
	FilterQuery::new(filter).matches(record)
}

#[cfg(test)]
mod tests {
	use super::{FilterQuery, matches};
	use crate::record::SearchableRecord;

	fn record(fields: &[Option<&str>]) -> SearchableRecord<()> {
		SearchableRecord::new((), fields.iter().copied())
	}

	#[test]
	fn raw_and_normalized_filters_both_match() {
		let medovka = record(&[Some("MEDOVKA")]);

		assert!(matches(&medovka, "med"));
		assert!(matches(&medovka, "mëd"));
		assert!(!matches(&medovka, "mead"));
	}

	#[test]
	fn any_present_field_is_enough() {
		let item = record(&[Some("Invoice"), None, Some("Účtovníctvo")]);

		assert!(matches(&item, "uctov"));
		assert!(matches(&item, "VOICE"));
	}

	#[test]
	fn record_without_present_fields_never_matches() {
		let empty = record(&[None, None]);

		assert!(!matches(&empty, "a"));
		assert!(!matches(&record(&[]), "a"));
	}

	#[test]
	fn diacritics_in_field_are_ignored() {
		let request = record(&[Some("Žiadosť o dovolenku")]);

		assert!(matches(&request, "ziadost"));
		assert!(matches(&request, "ŽIADOSŤ"));
	}

	#[test]
	fn query_keeps_the_raw_filter() {
		assert_eq!(FilterQuery::new("Mëd").as_str(), "Mëd");
	}
}
