//! Error types for the Glossa matching core.
//!
//! Uses `thiserror` for ergonomic error definition. Errors only arise at
//! rule-compile/configuration time; matching itself is total and has no
//! failure path.

use thiserror::Error;

/// Convenience alias for results of configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Glossa configuration operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a missing reference error.
    #[must_use]
    pub fn missing_reference() -> Self {
        Self::new(ErrorKind::MissingReference)
    }

    /// Creates a synthesis error.
    #[must_use]
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Synthesis(message.into()))
    }
}

/// Categorized error kinds for pattern matching configuration.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A string or POS pattern failed to compile as a regular expression.
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The pattern as supplied by the rule.
        pattern: String,
        /// The compiler's diagnostic.
        message: String,
    },

    /// A reference operation was requested on a slot with no reference
    /// binding.
    #[error("slot has no reference binding")]
    MissingReference,

    /// The synthesizer failed to produce surface forms.
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}
