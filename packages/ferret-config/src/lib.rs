mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Opener, Service};

use std::{fs, path::Path};

pub const SNAPSHOT_ORDERS: [&str; 2] = ["newest_first", "file"];

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	normalize(&mut cfg, path.parent().unwrap_or_else(|| Path::new("")));

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.path.as_os_str().is_empty() {
		return Err(Error::Validation { message: "catalog.path must be non-empty.".to_string() });
	}
	if !SNAPSHOT_ORDERS.contains(&cfg.catalog.order.as_str()) {
		return Err(Error::Validation {
			message: "catalog.order must be one of newest_first or file.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config, base_dir: &Path) {
	if cfg.catalog.path.is_relative() {
		cfg.catalog.path = base_dir.join(&cfg.catalog.path);
	}
	if cfg.opener.as_ref().map(|opener| opener.command.trim().is_empty()).unwrap_or(false) {
		cfg.opener = None;
	}
}
