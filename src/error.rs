use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Mindshift.
///
/// Library callers match on these; the binary wraps them in `anyhow` for
/// context chains at the edge.
#[derive(Debug, Error)]
pub enum MindshiftError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Analysis ────────────────────────────────────────────────────────
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Analysis errors ────────────────────────────────────────────────────────

/// The single "analysis failed" condition.
///
/// Callers treat every variant the same way; the variant only feeds the
/// diagnostic log line.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis failed: Gemini API key not found (set GEMINI_API_KEY or api_key in config)")]
    MissingApiKey,

    #[error("analysis failed: request error: {0}")]
    Request(String),

    #[error("analysis failed: Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("analysis failed: no response body from Gemini")]
    MissingBody,

    #[error("analysis failed: malformed response: {0}")]
    Decode(String),

    #[error("analysis failed: response violates contract: {0}")]
    Contract(String),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        // The URL never carries the key, but strip it anyway to keep logs short.
        Self::Request(err.without_url().to_string())
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, MindshiftError>;
