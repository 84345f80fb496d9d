use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use counter_patterns::cli::{Cli, Command};
use counter_patterns::config::{Config, ConfigStore};
use counter_patterns::logging::{self, LogSettings};
use counter_patterns::patterns::{Mode, PatternOptions};
use counter_patterns::play::{parse_steps, play};
use counter_patterns::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)?;
    let overrides = cli.overrides();
    overrides.apply(&mut config);
    config.validate()?;

    let log_settings = LogSettings::from_env(cli.log.as_deref(), &config.logging);
    if let Some(log_file) = logging::init_tracing(&log_settings).context("failed to create log file")? {
        tracing::info!(
            log = %log_file.display(),
            config = %path.display(),
            mode = %config.defaults.mode,
            "counter-patterns starting"
        );
    }

    match cli.command {
        None | Some(Command::Tui) => {
            ui::run(ConfigStore::new(config, path), overrides).context("terminal UI failed")?;
        }
        Some(Command::Play { steps, all, json }) => {
            let modes: Vec<Mode> = if all {
                Mode::ALL.to_vec()
            } else {
                vec![config.defaults.mode]
            };
            run_play(&steps, &modes, &config.pattern_options(), json)?;
        }
    }
    Ok(())
}

fn run_play(script: &str, modes: &[Mode], options: &PatternOptions, json: bool) -> Result<()> {
    let steps = parse_steps(script)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for mode in modes {
        let transcript = play(*mode, options, &steps)?;
        if json {
            serde_json::to_writer(&mut out, &transcript)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", transcript.to_line())?;
        }
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
