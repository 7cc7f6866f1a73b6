mod error;

pub use error::{Error, Result};

use std::{
	cmp::Reverse,
	collections::{BTreeMap, HashSet},
	fs,
	path::Path,
	str::FromStr,
};

use serde::Deserialize;
use uuid::Uuid;

use ferret_domain::{Item, SearchableRecord, Tag};

/// Order in which a snapshot hands records to a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapshotOrder {
	/// `created_at` descending; items created at the same instant keep file order.
	#[default]
	NewestFirst,
	File,
}
impl FromStr for SnapshotOrder {
	type Err = Error;

	fn from_str(raw: &str) -> Result<Self> {
		match raw {
			"newest_first" => Ok(Self::NewestFirst),
			"file" => Ok(Self::File),
			other => Err(Error::UnknownOrder(other.to_string())),
		}
	}
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
	#[serde(default)]
	items: Vec<Item>,
}

/// Read-only set of items loaded from a JSON catalog file.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
	items: Vec<Item>,
}
impl Catalog {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadCatalog { path: path.to_path_buf(), source: err })?;
		let file: CatalogFile = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseCatalog { path: path.to_path_buf(), source: err })?;
		let catalog = Self::from_items(file.items)?;

		tracing::info!(path = %path.display(), items = catalog.len(), "Catalog loaded.");

		Ok(catalog)
	}

	pub fn from_items(items: Vec<Item>) -> Result<Self> {
		let mut seen: HashSet<Uuid> = HashSet::with_capacity(items.len());

		for item in &items {
			if item.name.trim().is_empty() {
				return Err(Error::Invalid { message: format!("item {} has a blank name.", item.id) });
			}
			if !seen.insert(item.id) {
				return Err(Error::Invalid { message: format!("item id {} is duplicated.", item.id) });
			}
		}

		Ok(Self { items })
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Snapshot of every item.
	pub fn items(&self, order: SnapshotOrder) -> Vec<SearchableRecord<Item>> {
		snapshot(self.items.iter(), order)
	}

	/// Snapshot of the items carrying `tag`, compared exactly.
	pub fn items_tagged(&self, tag: &str, order: SnapshotOrder) -> Vec<SearchableRecord<Item>> {
		snapshot(self.items.iter().filter(|item| item.tags.iter().any(|name| name == tag)), order)
	}

	/// Distinct tag names with the number of items carrying each, sorted by name.
	pub fn tags(&self) -> Vec<SearchableRecord<Tag>> {
		let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

		for item in &self.items {
			let unique: HashSet<&str> = item.tags.iter().map(String::as_str).collect();

			for name in unique {
				*counts.entry(name).or_default() += 1;
			}
		}

		counts
			.into_iter()
			.map(|(name, item_count)| {
				SearchableRecord::from(Tag { name: name.to_string(), item_count })
			})
			.collect()
	}
}

fn snapshot<'a, I>(items: I, order: SnapshotOrder) -> Vec<SearchableRecord<Item>>
where
	I: Iterator<Item = &'a Item>,
{
	let mut items: Vec<&Item> = items.collect();

	if order == SnapshotOrder::NewestFirst {
		items.sort_by_key(|item| Reverse(item.created_at));
	}

	items.into_iter().cloned().map(SearchableRecord::from).collect()
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::{Error, SnapshotOrder};

	#[test]
	fn parses_snapshot_orders() {
		assert_eq!(SnapshotOrder::from_str("newest_first").ok(), Some(SnapshotOrder::NewestFirst));
		assert_eq!(SnapshotOrder::from_str("file").ok(), Some(SnapshotOrder::File));
		assert!(matches!(SnapshotOrder::from_str("random"), Err(Error::UnknownOrder(_))));
	}
}
