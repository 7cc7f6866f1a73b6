use std::{fmt::Debug, path::PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::normalize::{self, ComparisonKey};

/// A record kind that can be offered to a filter session.
///
/// The field list is fixed per kind: absent fields are reported as `None` and never match.
pub trait Searchable {
	type Id: Clone + Debug + PartialEq;

	fn record_id(&self) -> Self::Id;

	fn searchable_fields(&self) -> Vec<Option<&str>>;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub id: Uuid,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub path: Option<PathBuf>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}
impl Searchable for Item {
	type Id = Uuid;

	fn record_id(&self) -> Uuid {
		self.id
	}

	fn searchable_fields(&self) -> Vec<Option<&str>> {
		let mut fields = Vec::with_capacity(2 + self.tags.len());

		fields.push(Some(self.name.as_str()));
		fields.push(self.description.as_deref());
		fields.extend(self.tags.iter().map(|tag| Some(tag.as_str())));

		fields
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tag {
	pub name: String,
	pub item_count: usize,
}
impl Searchable for Tag {
	type Id = String;

	fn record_id(&self) -> String {
		self.name.clone()
	}

	fn searchable_fields(&self) -> Vec<Option<&str>> {
		vec![Some(self.name.as_str())]
	}
}

/// One present field with its comparison forms computed up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchField {
	text: String,
	lowered: String,
	key: ComparisonKey,
}
impl SearchField {
	pub fn new(text: &str) -> Self {
		Self { text: text.to_string(), lowered: text.to_lowercase(), key: normalize::key(text) }
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn lowered(&self) -> &str {
		&self.lowered
	}

	pub fn key(&self) -> &ComparisonKey {
		&self.key
	}
}

/// A snapshot entry: the record itself plus its resolved searchable fields.
#[derive(Clone, Debug)]
pub struct SearchableRecord<T> {
	value: T,
	fields: Vec<Option<SearchField>>,
}
impl<T> SearchableRecord<T> {
	pub fn new<I, S>(value: T, fields: I) -> Self
	where
		I: IntoIterator<Item = Option<S>>,
		S: AsRef<str>,
	{
		let fields =
			fields.into_iter().map(|field| field.map(|text| SearchField::new(text.as_ref()))).collect();

		Self { value, fields }
	}

	pub fn value(&self) -> &T {
		&self.value
	}

	pub fn into_value(self) -> T {
		self.value
	}

	/// Present fields, in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = &SearchField> {
		self.fields.iter().flatten()
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}
}
impl<T> SearchableRecord<T>
where
	T: Searchable,
{
	pub fn id(&self) -> T::Id {
		self.value.record_id()
	}
}
impl<T> From<T> for SearchableRecord<T>
where
	T: Searchable,
{
	fn from(value: T) -> Self {
		let fields: Vec<Option<String>> = value
			.searchable_fields()
			.into_iter()
			.map(|field| field.map(str::to_string))
			.collect();

		Self::new(value, fields)
	}
}
