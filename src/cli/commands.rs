use crate::catalog;
use crate::presentation::Mode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// `Mindshift` - one situation, seen through survival and creative eyes.
#[derive(Parser, Debug)]
#[command(name = "mindshift")]
#[command(author = "theonlyhennygod")]
#[command(version)]
#[command(
    about = "Contrast a survival and a creative reading of the same situation.",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: ~/.mindshift/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Without a subcommand the interactive view starts.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the full-screen interactive view
    Tui,

    /// Analyze one scenario and print the result
    Analyze {
        /// Predefined scenario id (see `mindshift scenarios`)
        #[arg(short, long, value_parser = parse_scenario_id, conflicts_with = "text")]
        scenario: Option<String>,

        /// Free-text scenario, sent verbatim
        #[arg(short, long)]
        text: Option<String>,

        /// Which reading to print
        #[arg(short, long, value_enum, default_value_t = ModeChoice::Both)]
        mode: ModeChoice,

        /// Print the raw analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the predefined scenarios
    Scenarios,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChoice {
    Survival,
    Creative,
    Both,
}

impl ModeChoice {
    /// Modes to print, survival first.
    pub fn modes(self) -> &'static [Mode] {
        match self {
            Self::Survival => &[Mode::Survival],
            Self::Creative => &[Mode::Creative],
            Self::Both => &[Mode::Survival, Mode::Creative],
        }
    }
}

fn parse_scenario_id(raw: &str) -> Result<String, String> {
    match catalog::find(raw) {
        Some(scenario) => Ok(scenario.id.to_string()),
        None => {
            let known: Vec<&str> = catalog::all().iter().map(|s| s.id).collect();
            Err(format!(
                "unknown scenario '{raw}' (expected one of: {})",
                known.join(", ")
            ))
        }
    }
}
