//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::patterns::{Mode, PropsTransform};
use crate::presenter::PresenterKind;

#[derive(Debug, Parser)]
#[command(name = "counter-patterns", version, about = "Four ways to share counter state with a presenter")]
pub struct Cli {
    /// Initial mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Instances rendered by comp-injection-on-each
    #[arg(short = 'n', long)]
    pub instances: Option<usize>,

    /// Presenter used by every pattern
    #[arg(short, long, value_enum)]
    pub presenter: Option<PresenterKind>,

    /// Prop-getter used by comp-injection-on-each
    #[arg(short, long, value_enum)]
    pub transform: Option<PropsTransform>,

    /// Config file (defaults to <config dir>/counter-patterns/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to PATH.<time>.<pid> (overrides COUNTER_PATTERNS_LOG)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal selector (default)
    Tui,
    /// Run a '+'/'-' script headlessly and print the displayed values
    Play {
        /// Steps, e.g. "++-"
        #[arg(allow_hyphen_values = true)]
        steps: String,
        /// Run every mode instead of the selected one
        #[arg(long)]
        all: bool,
        /// Emit one JSON object per mode
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            presenter: self.presenter,
            instances: self.instances,
            transform: self.transform,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub mode: Option<Mode>,
    pub presenter: Option<PresenterKind>,
    pub instances: Option<usize>,
    pub transform: Option<PropsTransform>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.defaults.mode = mode;
        }
        if let Some(presenter) = self.presenter {
            config.defaults.presenter = presenter;
        }
        if let Some(instances) = self.instances {
            config.patterns.instances = instances;
        }
        if let Some(transform) = self.transform {
            config.patterns.transform = transform;
        }
    }
}
