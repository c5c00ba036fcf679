//! Engine Comprehensive Test Suite
//!
//! Exercises the public surface end to end: the matcher and comparator one
//! value at a time, then queries and configuration documents over records.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test engine_comprehensive
//!
//! # Run comparator tests only
//! cargo test --test engine_comprehensive comparator::
//! ```

use std::sync::Once;

use sift::{Dataset, RecordSchema, Schema, Value};

pub mod matcher;
pub mod query;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

static TRACING: Once = Once::new();

/// Route engine logs to the test harness so failing tests show them
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

/// Schema for the server inventory used across suites
pub fn inventory_schema() -> RecordSchema {
    RecordSchema::new()
        .with("name", Schema::String)
        .with("active", Schema::Bool)
        .with("cpus", Schema::Int)
        .with("price", Schema::Float)
        .with("tags", Schema::set(Schema::String))
        .with("ports", Schema::list(Schema::Int))
}

/// Small server inventory; `cache-1` has no price
pub fn inventory() -> Dataset {
    Dataset::from_json_str(
        inventory_schema(),
        r#"[
            {"name": "web-1", "active": true, "cpus": 2, "price": 10.5,
             "tags": ["prod", "eu"], "ports": [80, 443]},
            {"name": "web-2", "active": true, "cpus": 8, "price": 40.0,
             "tags": ["prod", "us"], "ports": [80, 443, 8080]},
            {"name": "db-1", "active": false, "cpus": 16, "price": 120.0,
             "tags": ["prod", "eu", "ssd"], "ports": [5432]},
            {"name": "cache-1", "active": true, "cpus": 4, "price": 0.0,
             "tags": ["dev"], "ports": [6379]},
            {"name": "batch-1", "cpus": 8, "tags": ["dev", "eu"]}
        ]"#,
    )
    .expect("inventory fixture must decode")
}

/// Names of `records`, in order
pub fn names(records: &[sift::Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            r.get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string()
        })
        .collect()
}
