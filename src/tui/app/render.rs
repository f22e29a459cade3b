use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use super::UiState;
use crate::presentation::ViewModel;
use crate::tui::theme;
use crate::tui::widgets::{PathWidget, Spinner, SpinnerWidget, TextInput, TextInputWidget};

pub(super) fn draw_ui(
    area: Rect,
    buf: &mut Buffer,
    view: &ViewModel,
    ui: &UiState,
    spinner: &Spinner,
) {
    let mode = view.mode;
    let rows = Layout::vertical([
        Constraint::Length(2), // Title + separator
        Constraint::Length(2), // Scenario chips
        Constraint::Length(5), // Challenge
        Constraint::Length(3), // Mode blurb
        Constraint::Length(4), // Internal dialogue
        Constraint::Min(6),    // Path
        Constraint::Length(1), // Status line
        Constraint::Length(1), // Keybindings
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_title(rows[0], buf, view);
    render_chips(rows[1], buf, view);
    render_challenge(rows[2], buf, view, ui);

    Paragraph::new(Line::from(Span::styled(view.blurb.as_str(), theme::dim_style())))
        .wrap(Wrap { trim: true })
        .render(rows[3], buf);

    render_dialogue(rows[4], buf, view);

    let path_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(mode))
        .title(Line::from(vec![
            Span::styled(format!(" {} ", t!("section.path")), theme::heading_style()),
            Span::styled(format!("[{}] ", view.path_tag), theme::title_style(mode)),
        ]));
    let path_inner = path_block.inner(rows[5]);
    path_block.render(rows[5], buf);
    PathWidget::new(&view.path, mode).render(path_inner, buf);

    render_status(rows[6], buf, view, spinner);

    let keys = if ui.editing {
        t!("keys.editing")
    } else {
        t!("keys.browse")
    };
    Line::from(vec![
        Span::styled(format!("{}  ", view.toggle_cta), theme::title_style(mode.toggled())),
        Span::styled(keys, theme::keybinding_style()),
    ])
    .render(rows[7], buf);

    Line::from(Span::styled(view.footer.as_str(), theme::dim_style())).render(rows[8], buf);
}

fn render_title(area: Rect, buf: &mut Buffer, view: &ViewModel) {
    if area.height == 0 {
        return;
    }
    Line::from(vec![
        Span::styled(format!("{}  ", t!("app.title")), theme::heading_style()),
        Span::styled(format!(" {} ", view.badge), theme::badge_style(view.mode)),
    ])
    .render(Rect::new(area.x, area.y, area.width, 1), buf);

    if area.height > 1 {
        Line::from(Span::styled(
            "─".repeat(usize::from(area.width)),
            theme::dim_style(),
        ))
        .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }
}

fn render_chips(area: Rect, buf: &mut Buffer, view: &ViewModel) {
    let mut spans = Vec::with_capacity(view.chips.len() * 2);
    for (idx, chip) in view.chips.iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}] {}", idx + 1, chip.label),
            theme::chip_style(chip.active, view.mode),
        ));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_challenge(area: Rect, buf: &mut Buffer, view: &ViewModel, ui: &UiState) {
    let control_style = if view.reanalyze_enabled {
        theme::title_style(view.mode)
    } else {
        theme::disabled_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(view.mode))
        .title(Span::styled(
            format!(" {} ", t!("section.challenge")),
            theme::heading_style(),
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" r {} ", view.reanalyze_label),
            control_style,
        )));
    let inner = block.inner(area);
    block.render(area, buf);

    let placeholder = t!("placeholder.text");
    if ui.editing {
        TextInputWidget::new(&ui.input, &placeholder, true).render(inner, buf);
    } else {
        let shown = TextInput::new(&view.text);
        TextInputWidget::new(&shown, &placeholder, false).render(inner, buf);
    }
}

fn render_dialogue(area: Rect, buf: &mut Buffer, view: &ViewModel) {
    let lines = vec![
        Line::from(Span::styled(
            t!("section.dialogue").into_owned(),
            theme::heading_style(),
        )),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", view.motto),
            theme::motto_style(view.mode),
        )),
        Line::from(vec![
            Span::raw(format!("{} ", view.driver_icon)),
            Span::styled(
                format!("{}: ", view.driver_label),
                theme::title_style(view.mode),
            ),
            Span::styled(view.driver.as_str(), theme::text_style()),
        ]),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_status(area: Rect, buf: &mut Buffer, view: &ViewModel, spinner: &Spinner) {
    if let Some(banner) = &view.error {
        Line::from(Span::styled(banner.as_str(), theme::error_style())).render(area, buf);
    } else if !view.reanalyze_enabled {
        SpinnerWidget::new(spinner, &view.reanalyze_label, theme::title_style(view.mode))
            .render(area, buf);
    }
}
