//! Error types.

use thiserror::Error;

use crate::models::Discipline;

/// Errors produced while parsing, configuring, or simulating.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The textual payload could not be decoded. `line` is 1-based.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A produced schedule broke a timeline or metric invariant.
    /// Always an engine bug; the discipline's result is discarded.
    #[error("invariant violation in {discipline}: {detail}")]
    InvariantViolation {
        discipline: Discipline,
        detail: String,
    },

    /// Invalid engine configuration.
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScheduleError {
    /// Creates a malformed-input error for the given line.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Creates an invariant violation for the given discipline.
    pub fn invariant(discipline: Discipline, detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            discipline,
            detail: detail.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;
