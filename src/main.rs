#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use anyhow::Result;
use clap::Parser;
use mindshift::Config;
use mindshift::cli::{Cli, Commands};
use mindshift::observability::{self, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // The interactive view owns the terminal; everything else logs to stderr.
    let sink = match cli.command {
        None | Some(Commands::Tui) => LogSink::for_tui(&config.logging),
        Some(_) => LogSink::Stderr,
    };
    observability::init(&config.logging, &sink)?;

    if !config.file_found() {
        tracing::debug!(path = %config.config_path.display(), "no config file, using defaults");
    }
    let locale = config.apply_locale();
    tracing::debug!(locale, config = %config.config_path.display(), "config loaded");

    mindshift::app::dispatch(cli.command, config).await
}
