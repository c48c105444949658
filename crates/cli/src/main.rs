// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use scafaps::cli::Cli;
use scafaps::color::resolve_color;
use scafaps::config::{self, Config};
use scafaps::discovery;
use scafaps::error::ExitCode;
use scafaps::runner;
use scafaps::settings::Settings;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let code = match settings(&cli) {
        Ok(settings) => {
            let choice = resolve_color(settings.color, settings.no_color);
            let mut stdout = StandardStream::stdout(choice);
            match runner::run(&settings, std::io::stdin().lock(), &mut stdout) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("scafaps: {e:#}");
                    ExitCode::InternalError
                }
            }
        }
        Err(e) => {
            eprintln!("scafaps: {e:#}");
            ExitCode::ConfigError
        }
    };

    std::process::exit(code.into());
}

/// Diagnostics go to stderr, filtered by `SCAFAPS_LOG` (off by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCAFAPS_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Load the explicit or discovered config and merge the command line over it.
fn settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config = match config_path(cli)? {
        Some(path) => config::load(&path)?,
        None => Config::default(),
    };
    Ok(Settings::resolve(cli, &config)?)
}

fn config_path(cli: &Cli) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = &cli.config {
        return Ok(Some(path.clone()));
    }
    let cwd = std::env::current_dir()?;
    Ok(discovery::find_config(&cwd))
}
