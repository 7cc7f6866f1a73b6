pub mod matcher;
pub mod normalize;
pub mod record;
pub mod time_serde;

pub use matcher::{FilterQuery, matches};
pub use normalize::{ComparisonKey, key, strip_marks};
pub use record::{Item, SearchField, Searchable, SearchableRecord, Tag};
