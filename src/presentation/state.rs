//! View state and the reducer that transitions it.
//!
//! `reduce` is the only place state changes. It never performs I/O: an
//! analysis is requested by returning `Effect::Analyze`, and its completion
//! comes back as `Event::AnalysisFinished` tagged with the sequence number it
//! was issued under. Only the completion for the latest issued sequence is
//! committed.

use super::Mode;
use crate::analysis::MindsetResponse;
use crate::catalog::{self, Scenario};
use crate::error::AnalysisError;
use std::fmt;

/// Monotonic id for an issued analysis. `RequestSeq::NONE` means nothing was issued yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub const NONE: Self = Self(0);

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Failed {
        message: String,
    },
}

#[derive(Debug)]
pub enum Event {
    /// Initial automatic analysis of the current scenario. No-op once anything was issued.
    Start,
    SelectScenario(String),
    EditText(String),
    Reanalyze,
    ToggleMode,
    SetMode(Mode),
    AnalysisFinished {
        seq: RequestSeq,
        outcome: Result<MindsetResponse, AnalysisError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Analyze { seq: RequestSeq, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub mode: Mode,
    pub scenario: &'static Scenario,
    /// User override of the scenario prompt. `Some("")` is a real override.
    pub custom_text: Option<String>,
    pub analysis: Option<MindsetResponse>,
    pub status: AnalysisStatus,
    latest_seq: RequestSeq,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            scenario: catalog::default_scenario(),
            custom_text: None,
            analysis: None,
            status: AnalysisStatus::Idle,
            latest_seq: RequestSeq::NONE,
        }
    }

    /// Text the next re-analysis would send.
    pub fn current_text(&self) -> &str {
        self.custom_text.as_deref().unwrap_or(self.scenario.prompt)
    }

    pub fn is_loading(&self) -> bool {
        self.status == AnalysisStatus::Loading
    }

    pub fn can_reanalyze(&self) -> bool {
        !self.is_loading()
    }

    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            AnalysisStatus::Failed { message } => Some(message),
            AnalysisStatus::Idle | AnalysisStatus::Loading => None,
        }
    }

    fn has_issued(&self) -> bool {
        self.latest_seq != RequestSeq::NONE
    }

    fn issue(&mut self, text: String) -> Vec<Effect> {
        self.latest_seq = self.latest_seq.next();
        self.status = AnalysisStatus::Loading;
        tracing::debug!(seq = %self.latest_seq, "analysis issued");
        vec![Effect::Analyze {
            seq: self.latest_seq,
            text,
        }]
    }
}

pub fn reduce(state: &mut ViewState, event: Event) -> Vec<Effect> {
    match event {
        Event::Start => {
            if state.has_issued() {
                return Vec::new();
            }
            let text = state.current_text().to_string();
            state.issue(text)
        }
        Event::SelectScenario(id) => select_scenario(state, &id),
        Event::EditText(text) => {
            state.custom_text = Some(text);
            Vec::new()
        }
        Event::Reanalyze => {
            if !state.can_reanalyze() {
                tracing::debug!("re-analysis ignored while a request is in flight");
                return Vec::new();
            }
            let text = state.current_text().to_string();
            state.issue(text)
        }
        Event::ToggleMode => {
            state.mode = state.mode.toggled();
            Vec::new()
        }
        Event::SetMode(mode) => {
            state.mode = mode;
            Vec::new()
        }
        Event::AnalysisFinished { seq, outcome } => {
            finish_analysis(state, seq, outcome);
            Vec::new()
        }
    }
}

fn select_scenario(state: &mut ViewState, id: &str) -> Vec<Effect> {
    let Some(scenario) = catalog::find(id) else {
        tracing::warn!(scenario = id, "unknown scenario id ignored");
        return Vec::new();
    };

    let changed = scenario.id != state.scenario.id;
    state.scenario = scenario;
    state.custom_text = None;

    if changed || !state.has_issued() {
        state.issue(scenario.prompt.to_string())
    } else {
        Vec::new()
    }
}

fn finish_analysis(
    state: &mut ViewState,
    seq: RequestSeq,
    outcome: Result<MindsetResponse, AnalysisError>,
) {
    if seq != state.latest_seq {
        tracing::debug!(seq = %seq, latest = %state.latest_seq, "stale analysis result discarded");
        return;
    }

    match outcome {
        Ok(analysis) => {
            state.analysis = Some(analysis);
            state.status = AnalysisStatus::Idle;
        }
        Err(err) => {
            tracing::warn!(seq = %seq, error = %err, "failed to fetch mindset analysis");
            state.status = AnalysisStatus::Failed {
                message: err.to_string(),
            };
        }
    }
}
