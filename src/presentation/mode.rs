use crate::analysis::{ActionStep, MindsetResponse};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Interpretive lens applied to one analysis result.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    Survival,
    #[default]
    Creative,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Survival => Self::Creative,
            Self::Creative => Self::Survival,
        }
    }
}

/// The half of a `MindsetResponse` one mode reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSlice<'a> {
    pub motto: &'a str,
    /// `survivalFear` or `creativeVision`.
    pub driver: &'a str,
    pub path: &'a [ActionStep],
}

impl MindsetResponse {
    pub fn slice(&self, mode: Mode) -> ModeSlice<'_> {
        match mode {
            Mode::Survival => ModeSlice {
                motto: &self.survival_motto,
                driver: &self.survival_fear,
                path: &self.survival_path,
            },
            Mode::Creative => ModeSlice {
                motto: &self.creative_motto,
                driver: &self.creative_vision,
                path: &self.creative_path,
            },
        }
    }
}
