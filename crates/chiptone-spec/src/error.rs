//! Error types for melody validation and parsing.

use thiserror::Error;

/// A validation error with a message and an optional path into the melody
/// document (e.g. `voices[1].notes[3].duration_ms`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description of what is wrong.
    pub message: String,
    /// Path to the offending field, if known.
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a validation error without a path.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Creates a validation error pointing at a specific field.
    pub fn at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Errors that can occur when loading a melody document.
#[derive(Debug, Error)]
pub enum MelodyError {
    /// The file could not be read.
    #[error("failed to read melody file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid melody JSON.
    #[error("failed to parse melody JSON: {0}")]
    Json(#[from] serde_json::Error),
}
