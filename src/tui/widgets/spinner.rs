use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame counter advanced on every idle poll.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    pub tick: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }
}

pub struct SpinnerWidget<'a> {
    pub spinner: &'a Spinner,
    pub message: &'a str,
    pub style: Style,
}

impl<'a> SpinnerWidget<'a> {
    pub fn new(spinner: &'a Spinner, message: &'a str, style: Style) -> Self {
        Self {
            spinner,
            message,
            style,
        }
    }
}

impl Widget for SpinnerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 6 {
            return;
        }

        Line::from(vec![
            Span::styled(format!("{} ", self.spinner.frame()), self.style),
            Span::styled(self.message, self.style),
        ])
        .render(area, buf);
    }
}
