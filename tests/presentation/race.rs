use std::time::Duration;

use mindshift::catalog;
use mindshift::presentation::{Event, Session};

use crate::analyzer_harness::{ScriptedAnalyzer, response_for};

#[tokio::test]
async fn slow_stale_result_never_overwrites_newer_one() {
    let analyzer = ScriptedAnalyzer::new();
    let career = catalog::find("career").unwrap();
    let conflict = catalog::find("conflict").unwrap();
    analyzer.reply(career.prompt, response_for("career"));
    analyzer.reply(conflict.prompt, response_for("conflict"));
    analyzer.delay(career.prompt, Duration::from_millis(250));

    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.dispatch(Event::SelectScenario("conflict".into()));
    assert_eq!(session.in_flight(), 2);

    session.settle().await;

    assert_eq!(analyzer.calls().len(), 2);
    assert_eq!(session.view().motto, "conflict: build the vision.");
    assert_eq!(session.state().scenario.id, "conflict");
    assert!(!session.state().is_loading());
}

#[tokio::test]
async fn stale_completion_does_not_end_loading() {
    let analyzer = ScriptedAnalyzer::new();
    let health = catalog::find("health").unwrap();
    analyzer.delay(health.prompt, Duration::from_millis(250));

    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.dispatch(Event::SelectScenario("health".into()));

    // The first (stale) completion arrives well before the second.
    assert!(session.next_completion().await);
    assert!(session.state().is_loading());
    assert!(session.state().analysis.is_none());

    assert!(session.next_completion().await);
    assert!(!session.state().is_loading());
    assert_eq!(
        session.view().motto,
        format!("{}: build the vision.", health.prompt)
    );
}

#[tokio::test]
async fn stale_failure_does_not_raise_banner() {
    let analyzer = ScriptedAnalyzer::new();
    let career = catalog::find("career").unwrap();
    analyzer.fail(career.prompt);
    analyzer.delay(career.prompt, Duration::from_millis(200));

    let mut session = Session::new(analyzer.clone());
    session.dispatch(Event::Start);
    session.dispatch(Event::SelectScenario("health".into()));
    session.settle().await;

    assert!(session.view().error.is_none());
    assert!(session.state().analysis.is_some());
}
