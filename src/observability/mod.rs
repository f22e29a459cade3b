//! Log subscriber wiring.
//!
//! The line-oriented commands log to stderr. The full-screen view owns the
//! terminal, so it logs to the configured file or nowhere.

use crate::config::LoggingConfig;
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogSink {
    /// Sink for the interactive view: the configured file, else nothing.
    pub fn for_tui(config: &LoggingConfig) -> Self {
        config
            .file
            .clone()
            .map_or(Self::Discard, Self::File)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::File(_) => "file",
            Self::Discard => "discard",
        }
    }
}

/// Build the subscriber without installing it.
pub fn build_subscriber(
    level: LevelFilter,
    sink: &LogSink,
) -> anyhow::Result<Box<dyn Subscriber + Send + Sync>> {
    let subscriber: Box<dyn Subscriber + Send + Sync> = match sink {
        LogSink::Stderr => Box::new(
            FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish(),
        ),
        LogSink::File(path) => Box::new(
            FmtSubscriber::builder()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?))
                .finish(),
        ),
        LogSink::Discard => Box::new(
            FmtSubscriber::builder()
                .with_max_level(LevelFilter::OFF)
                .with_writer(std::io::sink)
                .finish(),
        ),
    };
    Ok(subscriber)
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(config: &LoggingConfig, sink: &LogSink) -> anyhow::Result<()> {
    let level = config.level_filter()?;
    let subscriber = build_subscriber(level, sink)?;
    tracing::subscriber::set_global_default(subscriber)
        .context("a global log subscriber is already installed")?;
    tracing::debug!(sink = sink.name(), level = %level, "logging initialised");
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
