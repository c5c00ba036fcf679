//! Convenient imports for Sift.
//!
//! ```
//! use sift::prelude::*;
//!
//! let hit = matches(&Schema::Int, &Value::Int(3), &FilterValue::from(5i64), MatchMode::LessThan);
//! assert_eq!(hit.ok(), Some(true));
//! ```

// Records
pub use crate::dataset::Dataset;

// Error handling
pub use crate::error::{Error, Result};

// Engine
pub use sift_core::{compare, matches, FilterValue, MatchMode, Schema, Value};

// Queries
pub use sift_query::{Direction, Filter, Query, QueryConfig, Record, RecordSchema, Sort};

// Re-export serde_json for convenience
pub use serde_json::json;
