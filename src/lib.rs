#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod analysis;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod presentation;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;

pub use analysis::{ActionStep, Analyzer, GeminiAnalyzer, MindsetResponse};
pub use catalog::Scenario;
pub use config::Config;
pub use error::{AnalysisError, ConfigError, MindshiftError, Result};
pub use presentation::{Event, Mode, Session, ViewState};
