use std::sync::Arc;

use mindshift::catalog;
use mindshift::presentation::{Event, Session};

use crate::analyzer_harness::ScriptedAnalyzer;

#[tokio::test]
async fn each_scenario_selection_clears_text_and_calls_once_with_its_prompt() {
    let analyzer = ScriptedAnalyzer::new();
    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.settle().await;

    // Start from the last scenario so that every catalog entry is a change.
    let last = catalog::all().last().unwrap();
    session.dispatch(Event::SelectScenario(last.id.to_string()));
    session.settle().await;

    for scenario in catalog::all() {
        session.dispatch(Event::EditText("my own words".into()));
        let before = analyzer.calls().len();

        session.dispatch(Event::SelectScenario(scenario.id.to_string()));
        session.settle().await;

        let calls = analyzer.calls();
        assert_eq!(calls.len(), before + 1, "scenario {}", scenario.id);
        assert_eq!(calls.last().unwrap(), scenario.prompt);
        assert!(session.state().custom_text.is_none());
        assert_eq!(session.view().text, scenario.prompt);
    }
}

#[tokio::test]
async fn reanalysis_sends_edited_text_verbatim() {
    let analyzer = ScriptedAnalyzer::new();
    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.settle().await;

    session.dispatch(Event::EditText("  spaced out  ".into()));
    assert_eq!(session.view().text, "  spaced out  ");
    assert_eq!(analyzer.calls().len(), 1, "editing alone never fetches");

    session.dispatch(Event::Reanalyze);
    session.settle().await;
    assert_eq!(analyzer.calls().last().unwrap(), "  spaced out  ");

    session.dispatch(Event::EditText(String::new()));
    session.dispatch(Event::Reanalyze);
    session.settle().await;
    assert_eq!(analyzer.calls().last().unwrap(), "");
}

#[tokio::test]
async fn reanalyze_while_loading_is_ignored() {
    let analyzer = ScriptedAnalyzer::new();
    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    assert!(!session.view().reanalyze_enabled);

    session.dispatch(Event::Reanalyze);
    session.dispatch(Event::Reanalyze);
    session.settle().await;

    assert_eq!(analyzer.calls().len(), 1);
    assert!(session.view().reanalyze_enabled);
}

#[tokio::test]
async fn session_accepts_any_analyzer_behind_the_trait() {
    let analyzer: Arc<dyn mindshift::Analyzer> = ScriptedAnalyzer::new();
    let mut session = Session::new(analyzer);
    session.dispatch(Event::Start);
    session.settle().await;
    assert!(session.state().analysis.is_some());
}
