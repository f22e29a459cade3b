//! One-shot scenario analysis against a generative text service.

pub mod gemini;
pub mod http_client;
pub mod prompt;
pub mod schema;
pub mod scrub;
pub mod types;

use crate::error::AnalysisError;
use std::future::Future;
use std::pin::Pin;

pub use gemini::GeminiAnalyzer;
pub use types::{ActionStep, MindsetResponse, PATH_LEN};

pub type AnalysisFuture<'a> =
    Pin<Box<dyn Future<Output = Result<MindsetResponse, AnalysisError>> + Send + 'a>>;

/// Produces a `MindsetResponse` for a free-text scenario.
///
/// One call, one outbound request. No caching, no retry.
pub trait Analyzer: Send + Sync {
    /// Backend identifier (e.g. "gemini").
    fn name(&self) -> &str;

    fn analyze<'a>(&'a self, scenario: &'a str) -> AnalysisFuture<'a>;
}
