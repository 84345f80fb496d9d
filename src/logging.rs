//! File logging for a process whose terminal belongs to the TUI.
//!
//! Nothing is written unless a log file is named, by `--log`, by
//! `COUNTER_PATTERNS_LOG`, or by `[logging] file` in the config, in that
//! order of precedence. `RUST_LOG` still overrides the configured level.

use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub const LOG_ENV: &str = "COUNTER_PATTERNS_LOG";

/// Where and how verbosely to log, after merging CLI, env and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub file: Option<PathBuf>,
    pub level: LevelFilter,
}

impl LogSettings {
    /// Merge the three sources. `config.level` must already be validated;
    /// an unparsable level falls back to `info`.
    pub fn resolve(cli_file: Option<&Path>, env_file: Option<OsString>, config: &LoggingConfig) -> Self {
        let file = cli_file
            .map(Path::to_path_buf)
            .or_else(|| env_file.filter(|value| !value.is_empty()).map(PathBuf::from))
            .or_else(|| config.file.clone());
        let level = config.level.parse().unwrap_or(LevelFilter::INFO);
        Self { file, level }
    }

    /// [`resolve`](Self::resolve) with the environment variable read from
    /// the process.
    pub fn from_env(cli_file: Option<&Path>, config: &LoggingConfig) -> Self {
        Self::resolve(cli_file, std::env::var_os(LOG_ENV), config)
    }
}

/// `{base}.{unix_secs}.{pid}`, so concurrent runs get separate files.
pub fn unique_log_path(base: &Path, unix_secs: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{unix_secs}.{pid}"));
    PathBuf::from(name)
}

/// Install the global subscriber. Returns the file actually written, or
/// `None` when logging is off.
pub fn init_tracing(settings: &LogSettings) -> io::Result<Option<PathBuf>> {
    let Some(base) = settings.file.as_deref() else {
        return Ok(None);
    };

    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(base, unix_secs, std::process::id());
    let file = File::create(&path)?;

    let filter = EnvFilter::builder()
        .with_default_directive(settings.level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .init();

    Ok(Some(path))
}
