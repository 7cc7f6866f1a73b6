use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	pub opener: Option<Opener>,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
	/// Relative paths are resolved against the directory of the config file.
	pub path: PathBuf,
	#[serde(default = "default_order")]
	pub order: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Opener {
	/// Program launched with the selected item's path as its only argument.
	pub command: String,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_order() -> String {
	"newest_first".to_string()
}
