use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use ferret_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Template config must include the requested section.");

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("ferret_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> ferret_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = ferret_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

#[test]
fn sample_config_loads() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML.to_string())
		.expect("Sample config must be valid.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.catalog.order, "newest_first");
	assert_eq!(cfg.opener.map(|opener| opener.command), Some("xdg-open".to_string()));
}

#[test]
fn relative_catalog_path_resolves_next_to_config() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML.to_string())
		.expect("Sample config must be valid.");

	assert_eq!(cfg.catalog.path, env::temp_dir().join("catalog.json"));
}

#[test]
fn absolute_catalog_path_is_kept() {
	let absolute = env::temp_dir().join("elsewhere").join("items.json");
	let payload = sample_toml_with(
		"catalog",
		"path",
		Value::String(absolute.to_string_lossy().into_owned()),
	);
	let cfg = load_payload(payload).expect("Config must be valid.");

	assert_eq!(cfg.catalog.path, absolute);
}

#[test]
fn catalog_order_must_be_known() {
	let payload = sample_toml_with("catalog", "order", Value::String("alphabetical".to_string()));
	let err = load_payload(payload).expect_err("Expected catalog.order validation error.");

	assert!(
		err.to_string().contains("catalog.order must be one of newest_first or file."),
		"Unexpected error: {err}"
	);
}

#[test]
fn log_level_must_be_non_empty() {
	let payload = sample_toml_with("service", "log_level", Value::String("  ".to_string()));
	let err = load_payload(payload).expect_err("Expected log_level validation error.");

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error: {err}");
}

#[test]
fn blank_opener_command_is_dropped() {
	let payload = sample_toml_with("opener", "command", Value::String(" ".to_string()));
	let cfg = load_payload(payload).expect("Config must be valid.");

	assert!(cfg.opener.is_none());
}

#[test]
fn defaults_fill_optional_keys() {
	let payload = "[service]\n\n[catalog]\npath = \"items.json\"\n".to_string();
	let cfg = load_payload(payload).expect("Config must be valid.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.catalog.order, "newest_first");
	assert!(cfg.opener.is_none());
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("ferret_config_test_missing.toml");
	let err = ferret_config::load(&path).expect_err("Expected a read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err}");
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err = load_payload("[service\n".to_string()).expect_err("Expected a parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error: {err}");
}
