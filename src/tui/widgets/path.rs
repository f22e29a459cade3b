use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::super::theme;
use crate::presentation::{Mode, PathView};

/// The four-step path, or its skeleton while nothing can be shown.
pub struct PathWidget<'a> {
    pub path: &'a PathView,
    pub mode: Mode,
}

impl<'a> PathWidget<'a> {
    pub fn new(path: &'a PathView, mode: Mode) -> Self {
        Self { path, mode }
    }
}

impl Widget for PathWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 8 {
            return;
        }

        let count = match self.path {
            PathView::Placeholders(count) => *count,
            PathView::Steps(steps) => steps.len(),
        };
        if count == 0 {
            return;
        }
        let share = u32::try_from(count).unwrap_or(1);
        let rows = Layout::vertical(vec![Constraint::Ratio(1, share); count]).split(area);

        match self.path {
            PathView::Placeholders(_) => {
                let width = usize::from(area.width.saturating_sub(4)).min(48);
                for row in rows.iter() {
                    Line::from(Span::styled("░".repeat(width), theme::dim_style()))
                        .render(*row, buf);
                }
            }
            PathView::Steps(steps) => {
                for (step, row) in steps.iter().zip(rows.iter()) {
                    let lines = vec![
                        Line::from(vec![
                            Span::styled(format!("{}  ", step.label), theme::title_style(self.mode)),
                            Span::raw(format!("{} ", step.icon)),
                            Span::styled(step.title.as_str(), theme::heading_style()),
                        ]),
                        Line::from(Span::styled(step.description.as_str(), theme::text_style())),
                    ];
                    Paragraph::new(lines)
                        .wrap(Wrap { trim: true })
                        .render(*row, buf);
                }
            }
        }
    }
}
