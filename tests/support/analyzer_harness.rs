#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mindshift::analysis::AnalysisFuture;
use mindshift::{ActionStep, AnalysisError, Analyzer, MindsetResponse};

pub fn steps(prefix: &str, icon: &str) -> Vec<ActionStep> {
    (1..=4)
        .map(|i| ActionStep {
            title: format!("{prefix} step {i}"),
            description: format!("{prefix} detail {i}"),
            icon: icon.to_string(),
        })
        .collect()
}

/// A well-formed response whose fields all mention `tag`.
pub fn response_for(tag: &str) -> MindsetResponse {
    MindsetResponse {
        survival_path: steps(&format!("{tag} survival"), "⚠️"),
        creative_path: steps(&format!("{tag} creative"), "🌱"),
        survival_motto: format!("{tag}: stop the bleeding."),
        creative_motto: format!("{tag}: build the vision."),
        survival_fear: format!("{tag}: fear"),
        creative_vision: format!("{tag}: vision"),
    }
}

/// The `health` example: mottos "Stop the bleeding." / "Build the vision.".
pub fn health_response() -> MindsetResponse {
    MindsetResponse {
        survival_path: steps("Triage", "🩹"),
        creative_path: steps("Design", "🌱"),
        survival_motto: "Stop the bleeding.".into(),
        creative_motto: "Build the vision.".into(),
        survival_fear: "Being exhausted forever.".into(),
        creative_vision: "A body that carries my ambitions.".into(),
    }
}

#[derive(Clone)]
enum Reply {
    Ok(MindsetResponse),
    Fail,
}

/// Fake analyzer with per-text replies and delays. Records every call.
pub struct ScriptedAnalyzer {
    replies: Mutex<HashMap<String, Reply>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedAnalyzer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn reply(&self, text: &str, response: MindsetResponse) {
        self.replies
            .lock()
            .unwrap()
            .insert(text.to_string(), Reply::Ok(response));
    }

    pub fn fail(&self, text: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(text.to_string(), Reply::Fail);
    }

    pub fn delay(&self, text: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(text.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Analyzer for ScriptedAnalyzer {
    fn name(&self) -> &str {
        "scripted"
    }

    fn analyze<'a>(&'a self, scenario: &'a str) -> AnalysisFuture<'a> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(scenario.to_string());
            let delay = self.delays.lock().unwrap().get(scenario).copied();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let reply = self.replies.lock().unwrap().get(scenario).cloned();
            match reply {
                Some(Reply::Ok(response)) => Ok(response),
                Some(Reply::Fail) => Err(AnalysisError::Request("scripted failure".into())),
                None => Ok(response_for(scenario)),
            }
        })
    }
}
