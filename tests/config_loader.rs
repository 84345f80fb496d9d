mod common;

use common::temp_config;
use counter_patterns::config::{Config, ConfigError, PatternsConfig, UiConfig, MAX_INSTANCES};
use counter_patterns::patterns::{Mode, PropsTransform};
use counter_patterns::presenter::PresenterKind;
use std::path::Path;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.defaults.mode, Mode::Hook);
    assert_eq!(config.defaults.presenter, PresenterKind::Classic);
    assert_eq!(config.patterns.instances, 4);
    assert_eq!(config.patterns.transform, PropsTransform::Identity);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("counter-patterns/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/counter-patterns/config.toml"))
        .expect("missing file is not an error");
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_file() {
    let (_dir, path) = temp_config(
        r#"
[defaults]
mode = "comp-injection-on-each"
presenter = "compact"

[patterns]
instances = 6
transform = "scale-by-index"

[ui]
tick_rate_ms = 100
"#,
    );

    let config = Config::load_from(&path).expect("Should load valid config");
    assert_eq!(config.defaults.mode, Mode::CompInjectionOnEach);
    assert_eq!(config.defaults.presenter, PresenterKind::Compact);
    assert_eq!(config.patterns.instances, 6);
    assert_eq!(config.patterns.transform, PropsTransform::ScaleByIndex);
    assert_eq!(config.ui.tick_rate_ms, 100);

    let options = config.pattern_options();
    assert_eq!(options.instances, 6);
    assert_eq!(options.presenter, PresenterKind::Compact);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config("[defaults]\nmode = \"render-prop\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.mode, Mode::RenderProp);
    assert_eq!(config.patterns, PatternsConfig::default());
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_unknown_mode_is_parse_error() {
    let (_dir, path) = temp_config("[defaults]\nmode = \"render_prop\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("this is not valid toml [[[");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_zero_instances() {
    let (_dir, path) = temp_config("[patterns]\ninstances = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("patterns.instances"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_too_many_instances() {
    let mut config = Config::default();
    config.patterns.instances = MAX_INSTANCES + 1;
    assert!(config.validate().is_err());
    config.patterns.instances = MAX_INSTANCES;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("tick_rate_ms")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test round-trip serialization/deserialization.
#[test]
fn test_config_roundtrip() {
    let mut original = Config::default();
    original.defaults.mode = Mode::CompInjection;
    original.patterns.transform = PropsTransform::ScaleByIndex;
    let serialized = toml::to_string(&original).expect("Should serialize");
    assert!(serialized.contains("comp-injection"));
    let deserialized: Config = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(original, deserialized);
}

#[test]
fn test_logging_section() {
    let (_dir, path) = temp_config("[logging]\nfile = \"/tmp/cp.log\"\nlevel = \"debug\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.file.as_deref(), Some(Path::new("/tmp/cp.log")));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let (_dir, path) = temp_config("[logging]\nlevel = \"loud\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("logging.level")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
