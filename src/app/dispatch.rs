use crate::analysis::{Analyzer, GeminiAnalyzer};
use crate::catalog;
use crate::cli::{Commands, ModeChoice};
use crate::presentation::{Event, Session, project_as};
use crate::ui;
use crate::Config;
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::info;

/// Build the analysis backend from config.
pub fn build_analyzer(config: &Config) -> Arc<dyn Analyzer> {
    let analyzer = GeminiAnalyzer::from_config(config);
    if !analyzer.has_api_key() {
        tracing::warn!("no API key configured; analyses will fail until one is set");
    }
    Arc::new(analyzer)
}

/// Run one analysis through the same session the interactive view uses.
///
/// `text` wins over `scenario`; with neither, the default scenario is used.
pub async fn run_analysis(
    analyzer: Arc<dyn Analyzer>,
    scenario: Option<&str>,
    text: Option<&str>,
) -> Result<Session> {
    let mut session = Session::new(analyzer);

    match (text, scenario) {
        (Some(text), _) => {
            session.dispatch(Event::EditText(text.to_string()));
            session.dispatch(Event::Start);
        }
        (None, Some(id)) => {
            if catalog::find(id).is_none() {
                bail!("unknown scenario '{id}'");
            }
            session.dispatch(Event::SelectScenario(id.to_string()));
        }
        (None, None) => session.dispatch(Event::Start),
    }

    session.settle().await;

    if let Some(message) = session.state().error() {
        bail!("{message}");
    }
    Ok(session)
}

async fn analyze(
    config: &Config,
    scenario: Option<&str>,
    text: Option<&str>,
    mode: ModeChoice,
    json: bool,
) -> Result<()> {
    let session = run_analysis(build_analyzer(config), scenario, text).await?;
    let state = session.state();

    if json {
        let analysis = state
            .analysis
            .as_ref()
            .context("analysis finished without a result")?;
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }

    for &mode in mode.modes() {
        print!("{}", ui::render_view(&project_as(state, mode)));
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn interactive(config: &Config) -> Result<()> {
    crate::tui::run(build_analyzer(config))
}

#[cfg(not(feature = "tui"))]
fn interactive(_config: &Config) -> Result<()> {
    bail!("this build has no interactive view; rebuild with `--features tui` or use `analyze`")
}

pub async fn dispatch(command: Option<Commands>, config: Config) -> Result<()> {
    match command.unwrap_or(Commands::Tui) {
        Commands::Tui => interactive(&config),
        Commands::Analyze {
            scenario,
            text,
            mode,
            json,
        } => {
            info!(model = %config.gemini.model, "running one-shot analysis");
            analyze(&config, scenario.as_deref(), text.as_deref(), mode, json).await
        }
        Commands::Scenarios => {
            print!("{}", ui::render_scenarios(catalog::all()));
            Ok(())
        }
    }
}
