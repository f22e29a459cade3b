//! Pure projection of `ViewState` into what a surface draws.

use super::{Mode, ViewState};
use crate::analysis::PATH_LEN;
use crate::catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioChip {
    pub id: &'static str,
    pub label: &'static str,
    /// Selected and not overridden by custom text.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// "Step 01".."Step 04"
    pub label: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathView {
    /// Skeleton blocks while loading or before the first result.
    Placeholders(usize),
    Steps(Vec<StepView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub mode: Mode,
    pub badge: String,
    pub chips: Vec<ScenarioChip>,
    pub text: String,
    pub text_is_custom: bool,
    pub reanalyze_label: String,
    pub reanalyze_enabled: bool,
    pub motto: String,
    pub driver_label: String,
    pub driver_icon: &'static str,
    pub driver: String,
    pub blurb: String,
    pub path_tag: String,
    pub path: PathView,
    pub error: Option<String>,
    pub toggle_cta: String,
    pub footer: String,
}

/// Project using the state's current mode.
pub fn project(state: &ViewState) -> ViewModel {
    project_as(state, state.mode)
}

/// Project as if `mode` were active, without touching the state.
pub fn project_as(state: &ViewState, mode: Mode) -> ViewModel {
    let slice = state.analysis.as_ref().map(|analysis| analysis.slice(mode));

    let path = match slice {
        Some(slice) if !state.is_loading() => PathView::Steps(
            slice
                .path
                .iter()
                .enumerate()
                .map(|(idx, step)| StepView {
                    label: step_label(idx),
                    title: step.title.clone(),
                    description: step.description.clone(),
                    icon: step.icon.clone(),
                })
                .collect(),
        ),
        _ => PathView::Placeholders(PATH_LEN),
    };

    let chips = catalog::all()
        .iter()
        .map(|scenario| ScenarioChip {
            id: scenario.id,
            label: scenario.label,
            active: scenario.id == state.scenario.id && state.custom_text.is_none(),
        })
        .collect();

    let (badge, driver_label, driver_icon, blurb, path_tag, toggle_cta) = match mode {
        Mode::Survival => (
            t!("mode.survival.badge"),
            t!("mode.survival.driver_label"),
            "⚠️",
            t!("mode.survival.blurb"),
            t!("mode.survival.tag"),
            t!("cta.to_creative"),
        ),
        Mode::Creative => (
            t!("mode.creative.badge"),
            t!("mode.creative.driver_label"),
            "👁️",
            t!("mode.creative.blurb"),
            t!("mode.creative.tag"),
            t!("cta.to_survival"),
        ),
    };

    let reanalyze_label = if state.is_loading() {
        t!("control.analyzing")
    } else {
        t!("control.reanalyze")
    };

    ViewModel {
        mode,
        badge: badge.into_owned(),
        chips,
        text: state.current_text().to_string(),
        text_is_custom: state.custom_text.is_some(),
        reanalyze_label: reanalyze_label.into_owned(),
        reanalyze_enabled: state.can_reanalyze(),
        motto: slice.map_or_else(
            || t!("placeholder.motto").into_owned(),
            |s| s.motto.to_string(),
        ),
        driver_label: driver_label.into_owned(),
        driver_icon,
        driver: slice.map_or_else(
            || t!("placeholder.driver").into_owned(),
            |s| s.driver.to_string(),
        ),
        blurb: blurb.into_owned(),
        path_tag: path_tag.into_owned(),
        path,
        error: state.error().map(|_| t!("error.banner").into_owned()),
        toggle_cta: toggle_cta.into_owned(),
        footer: t!("footer").into_owned(),
    }
}

fn step_label(idx: usize) -> String {
    t!("path.step", n = format!("{:02}", idx + 1)).into_owned()
}
