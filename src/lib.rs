//! # Sift
//!
//! Typed value matching and ordering for in-memory data queries.
//!
//! Sift answers two questions about values whose type is declared by a
//! [`Schema`]: does a value satisfy a filter, and how do two values sort.
//! On top of that it filters and sorts whole records.
//!
//! ## Quick Start
//!
//! ```
//! use sift::prelude::*;
//!
//! let schema = RecordSchema::new()
//!     .with("name", Schema::String)
//!     .with("tags", Schema::set(Schema::String))
//!     .with("cpus", Schema::Int);
//!
//! let data = Dataset::from_json_str(schema, r#"[
//!     {"name": "web-1", "tags": ["prod"], "cpus": 2},
//!     {"name": "web-2", "tags": ["prod", "eu"], "cpus": 8},
//!     {"name": "db-1", "tags": ["dev"], "cpus": 4}
//! ]"#).unwrap();
//!
//! let query = Query::builder()
//!     .filter(Filter::new("tags", ["PROD"]))
//!     .sort(Sort::desc("cpus"))
//!     .build(data.schema())
//!     .unwrap();
//!
//! let selected = data.select(&query).unwrap();
//! assert_eq!(selected[0]["name"].as_str(), Some("web-2"));
//! ```
//!
//! ## Layers
//!
//! - [`matches`] / [`compare`] - the engine, one value at a time
//! - [`Query`] - ANDed filters plus multi-key stable sort over records
//! - [`QueryConfig`] - the same query declared in TOML or JSON
//! - [`Dataset`] - owns a schema and the records decoded against it

#![warn(missing_docs)]

mod dataset;
mod error;

pub mod prelude;

pub use dataset::Dataset;
pub use error::{Error, Result};

// Re-export the engine
pub use sift_core::{
    approx_eq, check_orderable, compare, compare_sign, matches, sort_order, sort_values,
    FilterValue, MatchMode, Schema, SiftError, TypeTag, Value, FLOAT_EPSILON,
};

// Re-export the query layer
pub use sift_query::{
    decode_value, Direction, Filter, FilterConfig, Query, QueryBuilder, QueryConfig, QueryError,
    Record, RecordSchema, Sort, SortConfig,
};
