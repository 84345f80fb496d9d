mod loader;
mod store;
mod types;

pub use loader::{ConfigError, MAX_INSTANCES};
pub use store::ConfigStore;
pub use types::{Config, Defaults, LoggingConfig, PatternsConfig, UiConfig};
