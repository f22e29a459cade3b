use crate::presentation::Mode;
use console::style;
use std::fmt::Display;

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, placeholders, decorative rules
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Cyan bold: step labels, bullets
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Green: ids and confirmed values
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Red bold: failure banner
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Mode colour: red for survival, blue for creative.
pub fn mode_tint<D: Display>(mode: Mode, text: D) -> String {
    match mode {
        Mode::Survival => style(text).red().to_string(),
        Mode::Creative => style(text).blue().to_string(),
    }
}

/// Reversed mode colour for the badge.
pub fn badge<D: Display>(mode: Mode, text: D) -> String {
    match mode {
        Mode::Survival => style(format!(" {text} ")).white().on_red().bold().to_string(),
        Mode::Creative => style(format!(" {text} ")).white().on_blue().bold().to_string(),
    }
}

/// Italic mode colour for mottos.
pub fn motto<D: Display>(mode: Mode, text: D) -> String {
    match mode {
        Mode::Survival => style(text).red().italic().bold().to_string(),
        Mode::Creative => style(text).blue().italic().bold().to_string(),
    }
}
