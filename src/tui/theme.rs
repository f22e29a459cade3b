use crate::presentation::Mode;
use ratatui::style::{Color, Modifier, Style};

pub const SURVIVAL: Color = Color::Red;
pub const CREATIVE: Color = Color::Blue;
pub const ERROR: Color = Color::LightRed;
pub const DIM: Color = Color::DarkGray;
pub const TEXT: Color = Color::White;

pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Survival => SURVIVAL,
        Mode::Creative => CREATIVE,
    }
}

pub fn title_style(mode: Mode) -> Style {
    Style::default()
        .fg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

pub fn badge_style(mode: Mode) -> Style {
    Style::default()
        .fg(TEXT)
        .bg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

pub fn heading_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn motto_style(mode: Mode) -> Style {
    Style::default()
        .fg(mode_color(mode))
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

pub fn chip_style(active: bool, mode: Mode) -> Style {
    if active {
        badge_style(mode)
    } else {
        dim_style()
    }
}

pub fn border_style(mode: Mode) -> Style {
    Style::default().fg(mode_color(mode))
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(DIM)
}

pub fn text_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn cursor_style() -> Style {
    Style::default().fg(Color::Black).bg(TEXT)
}

pub fn disabled_style() -> Style {
    Style::default().fg(DIM).add_modifier(Modifier::DIM)
}

pub fn keybinding_style() -> Style {
    Style::default().fg(DIM)
}
