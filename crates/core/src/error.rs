//! Engine error types
//!
//! The matcher degrades silently (unsupported modes fall back to equality),
//! so the only errors it raises are caller bugs. The comparator additionally
//! refuses to order collections.

use crate::schema::TypeTag;
use thiserror::Error;

/// Errors raised by the matching and ordering engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiftError {
    /// A value or filter does not have the shape its schema declares
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Declared type
        expected: &'static str,
        /// Runtime shape found
        actual: &'static str,
    },

    /// Ordering was requested for a type without a sort order
    #[error("unsupported value type for sort: {type_tag}")]
    Unorderable {
        /// The offending type
        type_tag: TypeTag,
    },

    /// Input is well-typed but cannot be processed (e.g. NaN in a sort)
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the problem
        message: String,
    },

    /// A regular expression failed to compile
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// Source text of the pattern
        pattern: String,
        /// Compiler diagnostic
        message: String,
    },
}

impl SiftError {
    pub(crate) fn type_mismatch(expected: TypeTag, actual: &'static str) -> Self {
        SiftError::TypeMismatch {
            expected: expected.name(),
            actual,
        }
    }

    /// Check if this error reports a shape mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, SiftError::TypeMismatch { .. })
    }

    /// Check if this error reports an unorderable type
    pub fn is_unorderable(&self) -> bool {
        matches!(self, SiftError::Unorderable { .. })
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SiftError>;
