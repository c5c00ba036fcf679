//! Unified error type for Sift.
//!
//! Wraps the engine and query errors so callers handle a single type.

use sift_core::SiftError;
use sift_query::QueryError;
use thiserror::Error;

/// All Sift errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A value's shape does not match its schema or filter
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Ordering was requested for a List or Set
    #[error("unsupported value type for sort: {0}")]
    Unorderable(String),

    /// A value the engine cannot work with (NaN, out-of-range number)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A regex operand failed to compile
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// Pattern source
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// Attribute not declared by the record schema
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Filter declared without values
    #[error("filter on {0} has no values")]
    EmptyFilter(String),

    /// A raw attribute value could not be decoded
    #[error("cannot decode attribute {attribute}: {message}")]
    Decode {
        /// Attribute being decoded
        attribute: String,
        /// Underlying message
        message: String,
    },

    /// Malformed configuration or data document
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for Sift operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if ordering was requested for an unorderable type.
    pub fn is_unorderable(&self) -> bool {
        matches!(self, Error::Unorderable(_))
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

impl From<SiftError> for Error {
    fn from(e: SiftError) -> Self {
        match e {
            SiftError::TypeMismatch { expected, actual } => Error::TypeMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            SiftError::Unorderable { type_tag } => Error::Unorderable(type_tag.to_string()),
            SiftError::InvalidInput { message } => Error::InvalidInput(message),
            SiftError::InvalidPattern { pattern, message } => {
                Error::InvalidPattern { pattern, message }
            }
        }
    }
}

impl From<QueryError> for Error {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Engine(inner) => Error::from(inner),
            QueryError::UnknownAttribute(name) => Error::UnknownAttribute(name),
            QueryError::EmptyFilter(name) => Error::EmptyFilter(name),
            QueryError::Decode { attribute, source } => Error::Decode {
                attribute,
                message: source.to_string(),
            },
            QueryError::Config(msg) => Error::Config(msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
