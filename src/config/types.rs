use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::patterns::{Mode, PatternOptions, PropsTransform, DEFAULT_INSTANCES};
use crate::presenter::PresenterKind;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub patterns: PatternsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup choices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Mode selected when the app starts.
    #[serde(default)]
    pub mode: Mode,
    /// Presenter used by every pattern.
    #[serde(default)]
    pub presenter: PresenterKind,
}

/// Prop-getter pattern settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternsConfig {
    /// Number of instances rendered by `comp-injection-on-each` (1..=16).
    #[serde(default = "default_instances")]
    pub instances: usize,
    /// Prop-getter applied to each instance.
    #[serde(default)]
    pub transform: PropsTransform,
}

/// Terminal shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log file and verbosity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base path of the log file. Unset means no logging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_instances() -> usize {
    DEFAULT_INSTANCES
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            instances: default_instances(),
            transform: PropsTransform::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn pattern_options(&self) -> PatternOptions {
        PatternOptions {
            presenter: self.defaults.presenter,
            instances: self.patterns.instances,
            transform: self.patterns.transform,
        }
    }
}
