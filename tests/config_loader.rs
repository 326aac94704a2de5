use radixer::config::{Config, ConfigError};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.defaults.from_base, None);
    assert_eq!(config.defaults.to_base, None);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("radixer/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

/// Test that valid TOML parses correctly.
#[test]
fn test_parse_valid_toml() {
    let toml_content = r#"
[defaults]
from_base = 16
to_base = 2

[ui]
tick_rate_ms = 100
"#;

    let config: Config = toml::from_str(toml_content).expect("Should parse valid TOML");
    assert_eq!(config.defaults.from_base, Some(16));
    assert_eq!(config.defaults.to_base, Some(2));
    assert_eq!(config.ui.tick_rate_ms, 100);
}

/// Omitted sections fall back to defaults.
#[test]
fn test_parse_partial_toml() {
    let config: Config = toml::from_str("[defaults]\nfrom_base = 10\n").expect("Should parse");
    assert_eq!(config.defaults.from_base, Some(10));
    assert_eq!(config.defaults.to_base, None);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// Test that invalid TOML produces a parse error.
#[test]
fn test_parse_invalid_toml() {
    let result: Result<Config, _> = toml::from_str("this is not valid toml [[[");
    assert!(result.is_err());
}

#[test]
fn test_validation_rejects_unsupported_radix() {
    let mut config = Config::default();
    config.defaults.from_base = Some(3);

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("from_base"), "got: {message}");
            assert!(message.contains('3'), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tick_rate_ms"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

/// Missing file yields the default config rather than an error.
#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let config = Config::load_from(&path).expect("missing file should not error");
    assert_eq!(config.defaults.from_base, None);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// The real user flow: write TOML → load → validate.
#[test]
fn test_load_from_rejects_invalid_radix_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nto_base = 7\n").unwrap();

    let err = Config::load_from(&path).unwrap_err().to_string();
    assert!(err.contains("to_base"), "got: {err}");
    assert!(err.contains('7'), "got: {err}");
}

#[test]
fn test_load_from_reads_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nfrom_base = 2\nto_base = 10\n").unwrap();

    let config = Config::load_from(&path).expect("valid file should load");
    assert_eq!(config.defaults.from_base, Some(2));
    assert_eq!(config.defaults.to_base, Some(10));
}

/// Test round-trip serialization/deserialization.
#[test]
fn test_config_roundtrip() {
    let mut original = Config::default();
    original.defaults.from_base = Some(16);
    original.ui.tick_rate_ms = 125;

    let serialized = toml::to_string(&original).expect("Should serialize");
    let deserialized: Config = toml::from_str(&serialized).expect("Should deserialize");

    assert_eq!(original.defaults.from_base, deserialized.defaults.from_base);
    assert_eq!(original.defaults.to_base, deserialized.defaults.to_base);
    assert_eq!(original.ui.tick_rate_ms, deserialized.ui.tick_rate_ms);
}
