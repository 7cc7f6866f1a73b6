pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read catalog at {path:?}.")]
	ReadCatalog { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse catalog at {path:?}.")]
	ParseCatalog { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Invalid catalog: {message}")]
	Invalid { message: String },
	#[error("Unknown snapshot order '{0}'.")]
	UnknownOrder(String),
}
