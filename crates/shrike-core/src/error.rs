//! Error types for shrike operations.

use thiserror::Error;

/// Result type alias for shrike operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all shrike operations.
///
/// Trigger evaluation and filtering are total and never fail. Errors come
/// from configuration interpretation and timestamp parsing, plus the IO
/// that source and sink implementations do.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration line referenced a trigger name with no earlier definition.
    #[error("line {line}: unknown trigger name '{name}'")]
    UnknownName { name: String, line: usize },

    /// A definition line used a kind keyword outside the recognized set.
    #[error("line {line}: unknown trigger kind '{kind}'")]
    UnknownKind { kind: String, line: usize },

    /// A configuration line had the wrong shape for its kind.
    #[error("line {line}: malformed line: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A timestamp matched none of the accepted formats.
    #[error("invalid timestamp '{text}': {source}")]
    TimestampParse {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unknown-name error.
    pub fn unknown_name(name: impl Into<String>, line: usize) -> Self {
        Self::UnknownName {
            name: name.into(),
            line,
        }
    }

    /// Create an unknown-kind error.
    pub fn unknown_kind(kind: impl Into<String>, line: usize) -> Self {
        Self::UnknownKind {
            kind: kind.into(),
            line,
        }
    }

    /// Create a malformed-line error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create a timestamp-parse error for the given input text.
    pub fn timestamp(text: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampParse {
            text: text.into(),
            source,
        }
    }
}
