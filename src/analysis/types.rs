use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Number of steps in every action path.
pub const PATH_LEN: usize = 4;

/// One step of an action path. No identity beyond its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub title: String,
    pub description: String,
    /// A simple emoji representing the step.
    pub icon: String,
}

/// Full result of one analysis call, carrying both modes' content.
///
/// Replaced wholesale by the next analysis, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindsetResponse {
    pub survival_path: Vec<ActionStep>,
    pub creative_path: Vec<ActionStep>,
    pub survival_motto: String,
    pub creative_motto: String,
    pub survival_fear: String,
    pub creative_vision: String,
}

impl MindsetResponse {
    /// Decode a JSON body and check it against the response contract.
    pub fn from_json(body: &str) -> Result<Self, AnalysisError> {
        let response: Self =
            serde_json::from_str(body).map_err(|e| AnalysisError::Decode(e.to_string()))?;
        response.validate()?;
        Ok(response)
    }

    /// Exactly `PATH_LEN` steps per path and no blank text anywhere.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (name, path) in [
            ("survivalPath", &self.survival_path),
            ("creativePath", &self.creative_path),
        ] {
            if path.len() != PATH_LEN {
                return Err(AnalysisError::Contract(format!(
                    "{name} has {} steps, expected {PATH_LEN}",
                    path.len()
                )));
            }
            for (idx, step) in path.iter().enumerate() {
                for (field, value) in [
                    ("title", &step.title),
                    ("description", &step.description),
                    ("icon", &step.icon),
                ] {
                    if value.trim().is_empty() {
                        return Err(AnalysisError::Contract(format!(
                            "{name}[{idx}].{field} is empty"
                        )));
                    }
                }
            }
        }

        for (field, value) in [
            ("survivalMotto", &self.survival_motto),
            ("creativeMotto", &self.creative_motto),
            ("survivalFear", &self.survival_fear),
            ("creativeVision", &self.creative_vision),
        ] {
            if value.trim().is_empty() {
                return Err(AnalysisError::Contract(format!("{field} is empty")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn step(title: &str, icon: &str) -> ActionStep {
        ActionStep {
            title: title.to_string(),
            description: format!("{title} in detail"),
            icon: icon.to_string(),
        }
    }

    /// Well-formed response: survival steps `S1..S4`, creative steps `C1..C4`.
    pub(crate) fn sample_response() -> MindsetResponse {
        MindsetResponse {
            survival_path: (1..=4).map(|i| step(&format!("S{i}"), "⚠️")).collect(),
            creative_path: (1..=4).map(|i| step(&format!("C{i}"), "🌱")).collect(),
            survival_motto: "Stop the bleeding.".into(),
            creative_motto: "Build the vision.".into(),
            survival_fear: "Running out of energy forever.".into(),
            creative_vision: "A body that carries my ambitions.".into(),
        }
    }
}
