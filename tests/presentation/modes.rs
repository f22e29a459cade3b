use mindshift::catalog;
use mindshift::presentation::{Event, Mode, PathView, Session};

use crate::analyzer_harness::{ScriptedAnalyzer, health_response};

fn step_titles(path: &PathView) -> Vec<String> {
    match path {
        PathView::Steps(steps) => steps.iter().map(|s| s.title.clone()).collect(),
        PathView::Placeholders(n) => vec![String::new(); *n],
    }
}

#[tokio::test]
async fn health_example_swaps_exactly_the_mode_fields() {
    let analyzer = ScriptedAnalyzer::new();
    let health = catalog::find("health").unwrap();
    analyzer.reply(health.prompt, health_response());

    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::SelectScenario("health".into()));
    session.settle().await;

    let creative = session.view();
    assert_eq!(creative.mode, Mode::Creative);
    assert_eq!(creative.motto, "Build the vision.");
    assert_eq!(creative.driver_label, "The Manifest Vision");

    session.dispatch(Event::ToggleMode);
    let survival = session.view();
    assert_eq!(survival.motto, "Stop the bleeding.");
    assert_eq!(survival.driver, "Being exhausted forever.");
    assert_eq!(survival.driver_label, "The Root Fear");
    assert_eq!(
        step_titles(&survival.path),
        ["Triage step 1", "Triage step 2", "Triage step 3", "Triage step 4"]
    );

    assert_eq!(creative.text, survival.text);
    assert_eq!(creative.reanalyze_enabled, survival.reanalyze_enabled);
    assert_eq!(creative.chips, survival.chips);
    assert_eq!(analyzer.calls().len(), 1, "toggling never fetches");
}

#[tokio::test]
async fn toggling_never_mutates_the_stored_response() {
    let analyzer = ScriptedAnalyzer::new();
    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.settle().await;

    let stored = session.state().analysis.clone();
    for _ in 0..5 {
        session.dispatch(Event::ToggleMode);
    }
    session.dispatch(Event::SetMode(Mode::Survival));

    assert_eq!(session.state().analysis, stored);
    assert_eq!(analyzer.calls().len(), 1);
}

#[tokio::test]
async fn loading_shows_four_placeholders_in_either_mode() {
    let analyzer = ScriptedAnalyzer::new();
    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.settle().await;

    session.dispatch(Event::Reanalyze);
    for mode in [Mode::Survival, Mode::Creative] {
        session.dispatch(Event::SetMode(mode));
        let view = session.view();
        assert_eq!(view.path, PathView::Placeholders(4));
        assert_eq!(view.reanalyze_label, "Analyzing...");
    }
    session.settle().await;
    assert!(matches!(session.view().path, PathView::Steps(ref steps) if steps.len() == 4));
}

#[tokio::test]
async fn failure_keeps_previous_result_and_clears_loading() {
    let analyzer = ScriptedAnalyzer::new();
    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.settle().await;
    let before = session.state().analysis.clone();

    analyzer.fail("this one breaks");
    session.dispatch(Event::EditText("this one breaks".into()));
    session.dispatch(Event::Reanalyze);
    session.settle().await;

    let view = session.view();
    assert_eq!(session.state().analysis, before);
    assert!(view.reanalyze_enabled);
    assert!(view.error.is_some());
    assert!(session.state().error().unwrap().contains("analysis failed"));
}

#[tokio::test]
async fn failure_before_any_result_keeps_placeholders() {
    let analyzer = ScriptedAnalyzer::new();
    analyzer.fail(catalog::default_scenario().prompt);
    let mut session = Session::new(analyzer);
    session.dispatch(Event::Start);
    session.settle().await;

    let view = session.view();
    assert_eq!(view.path, PathView::Placeholders(4));
    assert_eq!(view.motto, "Loading insights...");
    assert_eq!(view.driver, "...");
}
