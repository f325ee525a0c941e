//! Semantic fit oracle boundary
//!
//! An oracle compares a snippet of a profile description with a job's
//! skill text and answers with an integer affinity in `0..=10`. Scoring
//! only ever sees this trait, so tests stub it and offline runs use
//! [`NoopOracle`].

mod gemini;

pub use gemini::{GeminiOracle, DEFAULT_GEMINI_URL};

use thiserror::Error;

/// Highest affinity an oracle may report
pub const MAX_FIT: u8 = 10;

/// Why an oracle call produced no usable score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Network failure, timeout, non-success status, or missing credentials
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// The reply was not an integer in 0..=10
    #[error("malformed reply: {0:?}")]
    Malformed(String),
}

/// External text-affinity scorer
pub trait SemanticFitOracle: Send + Sync {
    /// Rate how well `text_a` fits `text_b`, in `0..=10`
    fn evaluate(&self, text_a: &str, text_b: &str) -> Result<u8, OracleError>;

    /// Short name used in log events
    fn name(&self) -> &str {
        "oracle"
    }
}

/// Offline oracle that always answers 0
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOracle;

impl SemanticFitOracle for NoopOracle {
    fn evaluate(&self, _text_a: &str, _text_b: &str) -> Result<u8, OracleError> {
        Ok(0)
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Parse a raw oracle reply into a fit score.
///
/// The reply must be nothing but ASCII digits (surrounding whitespace
/// allowed) and at most [`MAX_FIT`].
pub fn parse_fit_reply(reply: &str) -> Result<u8, OracleError> {
    let trimmed = reply.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OracleError::Malformed(reply.to_string()));
    }

    match trimmed.parse::<u8>() {
        Ok(score) if score <= MAX_FIT => Ok(score),
        _ => Err(OracleError::Malformed(reply.to_string())),
    }
}
