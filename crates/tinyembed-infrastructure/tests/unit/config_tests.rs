//! Configuration loading and validation tests

use std::io::Write;

use tempfile::NamedTempFile;
use tinyembed_domain::error::Error;
use tinyembed_domain::value_objects::EncodingFormat;
use tinyembed_infrastructure::config::{AppConfig, ConfigLoader};

/// Prefix no real environment sets, so ambient variables never leak in
const TEST_ENV_PREFIX: &str = "TINYEMBED_UNIT_CONFIG_TEST";

fn loader_for(file: &NamedTempFile) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix(TEST_ENV_PREFIX)
}

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.runtime.provider, "ollama");
    assert_eq!(config.runtime.model, "nomic-embed-text");
    assert_eq!(config.runtime.encoding_format, EncodingFormat::Float);
    assert_eq!(config.runtime.timeout_secs, 30);
    assert_eq!(config.session.progress_throttle_ms, 50);
    assert_eq!(config.session.log_capacity, 500);
    assert_eq!(config.session.search_limit, 10);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix(TEST_ENV_PREFIX)
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_toml_overrides_defaults() {
    let file = toml_file(
        r#"
[runtime]
provider = "null"
model = "all-minilm"
encoding_format = "base64"

[session]
search_limit = 3
"#,
    );

    let config = loader_for(&file).load().unwrap();

    assert_eq!(config.runtime.provider, "null");
    assert_eq!(config.runtime.model, "all-minilm");
    assert_eq!(config.runtime.encoding_format, EncodingFormat::Base64);
    assert_eq!(config.session.search_limit, 3);
    // Untouched keys keep their defaults
    assert_eq!(config.runtime.timeout_secs, 30);
    assert_eq!(config.session.log_capacity, 500);
}

#[test]
fn test_invalid_values_rejected() {
    let cases = [
        ("[runtime]\nmodel = \"  \"\n", "model"),
        ("[runtime]\ntimeout_secs = 0\n", "timeout"),
        ("[runtime]\nprovider = \"onnx\"\n", "provider"),
        ("[logging]\nlevel = \"verbose\"\n", "log level"),
        ("[session]\nlog_capacity = 0\n", "log capacity"),
        ("[runtime]\nbase_url = \"\"\n", "base URL"),
    ];

    for (contents, expected) in cases {
        let file = toml_file(contents);
        match loader_for(&file).load() {
            Err(Error::Configuration { message, .. }) => {
                assert!(
                    message.to_lowercase().contains(&expected.to_lowercase()),
                    "message {message:?} should mention {expected}"
                );
            }
            other => panic!("Expected Configuration error for {contents:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_unknown_encoding_rejected() {
    let file = toml_file("[runtime]\nencoding_format = \"int8\"\n");
    assert!(matches!(
        loader_for(&file).load(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tinyembed.toml");
    let mut config = AppConfig::default();
    config.runtime.provider = "null".to_string();
    config.runtime.encoding_format = EncodingFormat::Base64;
    config.session.progress_throttle_ms = 0;

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix(TEST_ENV_PREFIX);
    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}
