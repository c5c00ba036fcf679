//! Query error types

use sift_core::SiftError;
use thiserror::Error;

/// Errors raised while building, configuring or applying a query
#[derive(Debug, Error)]
pub enum QueryError {
    /// The matching/ordering engine rejected its input
    #[error(transparent)]
    Engine(#[from] SiftError),

    /// A filter or sort names an attribute the record schema does not declare
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A filter was declared without any values
    #[error("filter on {0} has no values")]
    EmptyFilter(String),

    /// A raw value could not be decoded against the attribute's schema
    #[error("cannot decode attribute {attribute}: {source}")]
    Decode {
        /// Attribute being decoded
        attribute: String,
        /// Underlying shape error
        #[source]
        source: SiftError,
    },

    /// The configuration document could not be parsed
    #[error("invalid query config: {0}")]
    Config(String),
}

impl QueryError {
    /// Check if this error was raised by the engine itself
    pub fn is_engine(&self) -> bool {
        matches!(self, QueryError::Engine(_))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, QueryError::Config(_))
    }
}

impl From<toml::de::Error> for QueryError {
    fn from(e: toml::de::Error) -> Self {
        QueryError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Config(e.to_string())
    }
}

/// Result type for query operations
pub type Result<T> = std::result::Result<T, QueryError>;
