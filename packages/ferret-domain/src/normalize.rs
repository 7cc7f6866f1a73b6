use std::fmt::{Display, Formatter};

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Diacritic-stripped, lowercased form of a text value.
///
/// Keys are only compared against each other and are never shown to the operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComparisonKey(String);
impl ComparisonKey {
	pub fn as_str(&self) -> &str {
		self.0.as_str()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, needle: &ComparisonKey) -> bool {
		self.0.contains(needle.0.as_str())
	}
}
impl AsRef<str> for ComparisonKey {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Display for ComparisonKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

pub fn key(text: &str) -> ComparisonKey {
	ComparisonKey(strip_marks(text).to_lowercase())
}

/// Decomposes `text`, drops every combining mark, and recomposes what is left.
///
/// Running this over its own output is a no-op.
pub fn strip_marks(text: &str) -> String {
	text.nfd().filter(|ch| !is_combining_mark(*ch)).nfc().collect()
}

#[cfg(test)]
mod tests {
	use super::{key, strip_marks};

	#[test]
	fn strips_diacritics_and_folds_case() {
		assert_eq!(key("Žiadosť"), key("ziadost"));
		assert_eq!(key("MEDOVKA"), key("medovka"));
		assert_eq!(key("Crème Brûlée").as_str(), "creme brulee");
	}

	#[test]
	fn empty_text_yields_empty_key() {
		assert!(key("").is_empty());
		assert_eq!(strip_marks(""), "");
	}

	#[test]
	fn stripping_is_idempotent() {
		for sample in [
			"Žiadosť",
			"e\u{0301}",
			"\u{212B}ngström",
			"한국어",
			"Ελληνικά",
			"plain ascii",
			"\u{0301}leading mark",
		] {
			let once = strip_marks(sample);

			assert_eq!(strip_marks(&once), once, "Not idempotent for {sample:?}.");
		}
	}

	#[test]
	fn precomposed_and_decomposed_forms_agree() {
		assert_eq!(key("caf\u{00E9}"), key("cafe\u{0301}"));
	}

	#[test]
	fn scripts_without_marks_pass_through() {
		assert_eq!(strip_marks("東京"), "東京");
	}
}
