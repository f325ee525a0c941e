//! Error types and exit codes for talentrank
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (unknown job template, unreadable profile data)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::oracle::OracleError;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing template, invalid profile file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading, scoring or ranking
#[derive(Error, Debug)]
pub enum RankError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("profile {profile} is missing required field: {field}")]
    ProfileFieldMissing { field: String, profile: String },

    #[error("invalid profile data in {path:?}: {reason}")]
    InvalidProfiles { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("semantic fit oracle: {0}")]
    Oracle(#[from] OracleError),

    #[error("ranking interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl RankError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RankError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RankError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a profile lacking a required field
    pub fn profile_field_missing(field: &str, profile: impl std::fmt::Display) -> Self {
        RankError::ProfileFieldMissing {
            field: field.to_string(),
            profile: profile.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RankError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RankError::UnknownFormat(_)
            | RankError::UsageError(_)
            | RankError::InvalidValue { .. } => ExitCode::Usage,

            RankError::NotFound { .. }
            | RankError::ProfileFieldMissing { .. }
            | RankError::InvalidProfiles { .. } => ExitCode::Data,

            RankError::Io(_)
            | RankError::Json(_)
            | RankError::Toml(_)
            | RankError::Oracle(_)
            | RankError::Interrupted
            | RankError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RankError::UnknownFormat(_) => "unknown_format",
            RankError::UsageError(_) => "usage_error",
            RankError::InvalidValue { .. } => "invalid_value",
            RankError::NotFound { .. } => "not_found",
            RankError::ProfileFieldMissing { .. } => "profile_field_missing",
            RankError::InvalidProfiles { .. } => "invalid_profiles",
            RankError::Io(_) => "io_error",
            RankError::Json(_) => "json_error",
            RankError::Toml(_) => "toml_error",
            RankError::Oracle(_) => "oracle_error",
            RankError::Interrupted => "interrupted",
            RankError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for talentrank operations
pub type Result<T> = std::result::Result<T, RankError>;
