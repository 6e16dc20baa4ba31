//! Error types for the Bookery domain
//!
//! Every failure in this system is a precondition violation: raised at the
//! boundary of the operation that received the bad input, propagated to the
//! caller, never recovered internally and never retried.

use std::fmt;
use thiserror::Error;

/// Classification of a failure, independent of which crate raised it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input at an operation boundary
    InvalidArgument,
    /// Preconditions not met by the current internal state
    InvalidState,
    /// Indexing past the end of a sequence
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::InvalidState => write!(f, "invalid state"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Errors raised by the core domain types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Invalid argument provided
    #[error("Invalid argument: {argument} - {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// Genre string outside the three accepted names
    #[error("Genre must be Fiction, NonFiction, or Reference, got '{value}'")]
    UnknownGenre { value: String },
}

impl DomainError {
    /// Returns the classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::UnknownGenre { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Helper for the blank-string rejections shared by every named thing
    pub fn blank(argument: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: "must not be blank".to_string(),
        }
    }
}

/// Convenience type alias for Results using DomainError
pub type Result<T> = std::result::Result<T, DomainError>;
