use super::{Effect, Event, ViewModel, ViewState, project, reduce};
use crate::analysis::Analyzer;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns the view state and executes the effects the reducer returns.
///
/// Each `Effect::Analyze` becomes one spawned task; its completion comes
/// back through an unbounded channel and is fed into the reducer by
/// `poll_completions` or `next_completion`. Superseded tasks still run to
/// completion and the reducer drops their results.
pub struct Session {
    state: ViewState,
    analyzer: Arc<dyn Analyzer>,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    in_flight: usize,
}

impl Session {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ViewState::new(),
            analyzer,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> ViewModel {
        project(&self.state)
    }

    /// Must be called inside a tokio runtime: analysis effects are spawned.
    pub fn dispatch(&mut self, event: Event) {
        for effect in reduce(&mut self.state, event) {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Analyze { seq, text } => {
                let analyzer = Arc::clone(&self.analyzer);
                let tx = self.tx.clone();
                self.in_flight += 1;
                tracing::info!(seq = %seq, analyzer = analyzer.name(), "starting analysis");
                tokio::spawn(async move {
                    let outcome = analyzer.analyze(&text).await;
                    // Receiver gone means the session was dropped; nothing to report to.
                    let _ = tx.send(Event::AnalysisFinished { seq, outcome });
                });
            }
        }
    }

    /// Feed every completion that already arrived. Returns how many were applied.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply_completion(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and feed it. Returns `false` when nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.rx.recv().await {
            Some(event) => {
                self.apply_completion(event);
                true
            }
            None => false,
        }
    }

    /// Wait until every spawned analysis has reported back.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn apply_completion(&mut self, event: Event) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let effects = reduce(&mut self.state, event);
        debug_assert!(effects.is_empty(), "completions never issue analyses");
        for effect in effects {
            self.run(effect);
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("analyzer", &self.analyzer.name())
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
