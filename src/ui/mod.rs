//! Line-oriented output for the non-interactive commands.

pub mod render;
pub mod style;

pub use render::{render_scenarios, render_view};
