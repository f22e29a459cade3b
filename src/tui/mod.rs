//! Full-screen interactive view.

mod app;
pub mod theme;
pub mod widgets;

use crate::analysis::Analyzer;
use anyhow::Result;
use std::sync::Arc;

pub use app::UiState;

/// Run the interactive view on the current multi-threaded runtime.
///
/// The terminal loop blocks on input polling; analyses run on the
/// runtime's worker threads meanwhile.
pub fn run(analyzer: Arc<dyn Analyzer>) -> Result<()> {
    tokio::task::block_in_place(|| app::run_app(analyzer))
}
