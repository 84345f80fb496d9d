//! Shared test utilities.

#![allow(dead_code)]

use counter_patterns::cli::Overrides;
use counter_patterns::config::{Config, ConfigStore};
use counter_patterns::patterns::Adapter;
use counter_patterns::ui::app::App;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    let config = ConfigStore::new(
        Config::default(),
        PathBuf::from("/tmp/counter-patterns-test.toml"),
    );
    App::new(config, Overrides::default())
}

// -- Adapter helpers ----------------------------------------------------------

/// Render, then for each label press it and render again. Returns the
/// displayed values of every render.
pub fn drive(adapter: &mut dyn Adapter, labels: &[&str]) -> Vec<Vec<i64>> {
    let mut view = adapter.render();
    let mut shown = vec![view.displayed_values()];
    for label in labels {
        assert!(view.press(label), "no '{}' button in {}", label, adapter.mode());
        view = adapter.render();
        shown.push(view.displayed_values());
    }
    shown
}
