//! Predefined scenarios the user can pick from.

use serde::Serialize;

/// A predefined life situation. Identity is `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

pub static SCENARIOS: [Scenario; 4] = [
    Scenario {
        id: "career",
        label: "💼 職涯抉擇 (Career Move)",
        prompt: "I want to quit my boring job and start something new.",
    },
    Scenario {
        id: "health",
        label: "🏋️ 健康轉型 (Health Goal)",
        prompt: "I want to lose 10kg and get fit but I am always tired.",
    },
    Scenario {
        id: "conflict",
        label: "🤝 人際衝突 (Conflict)",
        prompt: "I had a huge argument with my partner about money.",
    },
    Scenario {
        id: "finance",
        label: "💸 財務壓力 (Money Stress)",
        prompt: "I am buried in debt and I avoid opening my bank statements.",
    },
];

pub fn all() -> &'static [Scenario] {
    &SCENARIOS
}

pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

pub fn default_scenario() -> &'static Scenario {
    &SCENARIOS[0]
}
