use super::style;
use crate::catalog::Scenario;
use crate::presentation::{PathView, ViewModel};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────";

/// Render one projected view as a block of styled lines.
pub fn render_view(view: &ViewModel) -> String {
    let mut out = String::new();
    let mode = view.mode;

    let _ = writeln!(out, "{}", style::badge(mode, &view.badge));
    let _ = writeln!(out, "{}", style::dim(&view.blurb));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", style::header(t!("section.challenge")));
    let _ = writeln!(out, "  \"{}\"", view.text);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", style::header(t!("section.dialogue")));
    let _ = writeln!(out, "  {}", style::motto(mode, &view.motto));
    let _ = writeln!(
        out,
        "  {} {}: {}",
        view.driver_icon,
        style::mode_tint(mode, &view.driver_label),
        view.driver
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} {}",
        style::header(t!("section.path")),
        style::dim(format!("[{}]", view.path_tag))
    );
    match &view.path {
        PathView::Placeholders(count) => {
            for _ in 0..*count {
                let _ = writeln!(out, "  {}", style::dim("░░░░░░░░░░░░░░░░"));
            }
        }
        PathView::Steps(steps) => {
            for step in steps {
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    style::accent(&step.label),
                    step.icon,
                    style::header(&step.title)
                );
                let _ = writeln!(out, "     {}", step.description);
            }
        }
    }

    if let Some(banner) = &view.error {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style::error(banner));
    }

    let _ = writeln!(out, "{}", style::dim(RULE));
    out
}

/// Render the catalog, one scenario per line.
pub fn render_scenarios(scenarios: &[Scenario]) -> String {
    let mut out = String::new();
    for (idx, scenario) in scenarios.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {:<10} {}",
            style::accent(idx + 1),
            style::value(scenario.id),
            scenario.label
        );
        let _ = writeln!(out, "    {}", style::dim(scenario.prompt));
    }
    out
}
