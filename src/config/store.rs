//! Shared configuration storage.
//!
//! Holds the live config plus the file it came from, so the UI can reload it
//! on request. Command-line overrides are re-applied by the caller after a
//! reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Replace the current config.
    pub fn set(&self, config: Config) {
        *self.inner.write() = config;
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<Config, ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config.clone();
        Ok(config)
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Mode;
    use std::fs;

    #[test]
    fn reload_picks_up_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = ConfigStore::new(Config::default(), path.clone());

        fs::write(&path, "[defaults]\nmode = \"render-prop\"\n").unwrap();
        let config = store.reload().unwrap();
        assert_eq!(config.defaults.mode, Mode::RenderProp);
        assert_eq!(store.get().defaults.mode, Mode::RenderProp);
    }

    #[test]
    fn failed_reload_keeps_previous_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = ConfigStore::new(Config::default(), path.clone());

        fs::write(&path, "[patterns]\ninstances = 0\n").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.get(), Config::default());
    }
}
