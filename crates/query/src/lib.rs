//! # Sift Query
//!
//! Record filtering and sorting on top of [`sift_core`].
//!
//! Records are flat attribute maps typed by a [`RecordSchema`]. A [`Query`]
//! ANDs its [`Filter`]s and orders the survivors by its [`Sort`] keys.
//! Queries can be assembled in code with [`QueryBuilder`] or declared in a
//! TOML/JSON document through [`QueryConfig`].
//!
//! ```
//! use sift_query::{Filter, Query, RecordSchema, Sort};
//! use sift_core::{MatchMode, Schema};
//! use serde_json::json;
//!
//! let schema = RecordSchema::new()
//!     .with("name", Schema::String)
//!     .with("cpus", Schema::Int);
//!
//! let query = Query::builder()
//!     .filter(Filter::new("cpus", [2i64]).match_by(MatchMode::GreaterThanOrEqual))
//!     .sort(Sort::desc("cpus"))
//!     .build(&schema)
//!     .unwrap();
//!
//! let records = vec![
//!     schema.decode_record(&json!({"name": "a", "cpus": 1})).unwrap(),
//!     schema.decode_record(&json!({"name": "b", "cpus": 4})).unwrap(),
//!     schema.decode_record(&json!({"name": "c", "cpus": 2})).unwrap(),
//! ];
//! let selected = query.apply(records).unwrap();
//! assert_eq!(selected.len(), 2);
//! assert_eq!(selected[0]["name"].as_str(), Some("b"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filter;
pub mod query;
pub mod record;

pub use config::{FilterConfig, QueryConfig, SortConfig};
pub use error::{QueryError, Result};
pub use filter::{Direction, Filter, Sort};
pub use query::{Query, QueryBuilder};
pub use record::{decode_value, Record, RecordSchema};
