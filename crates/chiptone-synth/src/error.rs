//! Error types for melody rendering.
//!
//! Every failure crossing the render boundary is one of exactly two kinds:
//! a note (or melody) that cannot be rendered, or an I/O failure writing the
//! output file. Nothing escapes a render as an unstructured panic.

use chiptone_spec::ValidationError;
use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering a melody.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A note or melody failed validation: bad channel parameter,
    /// non-positive duration, or a zero frequency routed to a generator.
    /// Fatal to that melody's render, never silently skipped.
    #[error("invalid note: {reason}")]
    InvalidNote {
        /// What was wrong with the note.
        reason: String,
    },

    /// The output file could not be written. No retry happens in the core;
    /// fallback policy belongs to the caller.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid note error.
    pub fn invalid_note(reason: impl Into<String>) -> Self {
        Self::InvalidNote {
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for SynthError {
    fn from(err: ValidationError) -> Self {
        match &err.path {
            Some(path) => SynthError::invalid_note(format!("{} (at {})", err.message, path)),
            None => SynthError::invalid_note(err.message.clone()),
        }
    }
}
