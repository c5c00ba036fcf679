//! # Sift Core
//!
//! Typed value matching and ordering.
//!
//! Given a [`Schema`] and [`Value`]s validated against it, the engine answers
//! two questions:
//!
//! - [`matches`]: does a value satisfy a filter under a [`MatchMode`]?
//! - [`compare`]: how do two values of an orderable schema sort?
//!
//! Both are pure functions with no shared state; they can be called from any
//! number of threads at once.
//!
//! ```
//! use sift_core::{compare, matches, FilterValue, MatchMode, Schema, Value};
//! use std::cmp::Ordering;
//!
//! let tags = Schema::list(Schema::String);
//! let value = Value::List(vec!["Prod".into(), "eu".into()]);
//! assert!(matches(&tags, &value, &FilterValue::from("prod"), MatchMode::Equals).unwrap());
//!
//! let order = compare(&Schema::Int, &Value::Int(3), &Value::Int(5)).unwrap();
//! assert_eq!(order, Ordering::Less);
//! ```

#![warn(missing_docs)]

pub mod compare;
pub mod error;
pub mod filter;
pub mod float;
pub mod matcher;
pub mod mode;
pub mod schema;
pub mod value;

pub use compare::{check_orderable, compare, compare_sign, sort_order, sort_values};
pub use error::{Result, SiftError};
pub use filter::FilterValue;
pub use float::{approx_eq, FLOAT_EPSILON};
pub use matcher::matches;
pub use mode::MatchMode;
pub use schema::{Schema, TypeTag};
pub use value::Value;
