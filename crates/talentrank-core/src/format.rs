//! Output format handling for talentrank
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and LLM context

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RankError;
use crate::matching::truncate_chars;

/// Output format for talentrank commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(RankError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape double quotes for records output
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Shorten long free text for terminal display, marking the cut with "..."
pub fn elide(text: &str, max_chars: usize) -> String {
    let cut = truncate_chars(text, max_chars);
    if cut.len() < text.len() {
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
