//! Value types for Sift
//!
//! This module defines the runtime payload matched and ordered by the engine.
//! The Value enum mirrors the six schema shapes one-to-one.
//!
//! ## Contract
//!
//! - No implicit type coercions (`Int(1)` is not `Float(1.0)`)
//! - IEEE-754 float equality for `PartialEq` (the engine's own tolerance is
//!   applied by the matcher and comparator, not here)
//! - `Set` equality ignores element order

use crate::schema::{Schema, TypeTag};
use serde::{Deserialize, Serialize};

/// Runtime value handed to the engine
///
/// A value is only meaningful together with the [`Schema`] it was validated
/// against; see [`Value::conforms_to`].
///
/// ## Equality Rules
///
/// - Different variants are NEVER equal
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
/// - `List` compares element-wise in order
/// - `Set` compares as a multiset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 encoded string
    String(String),

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// Ordered sequence of values
    List(Vec<Value>),

    /// Unordered collection of values
    ///
    /// Stored as a vector; iteration order carries no meaning.
    Set(Vec<Value>),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        self.type_tag().name()
    }

    /// Tag of the outermost shape
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::String(_) => TypeTag::String,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::List(_) => TypeTag::List,
            Value::Set(_) => TypeTag::Set,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Elements of a `List` or `Set`
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Check that this value's shape agrees with `schema`, recursively
    pub fn conforms_to(&self, schema: &Schema) -> bool {
        match (schema, self) {
            (Schema::String, Value::String(_))
            | (Schema::Bool, Value::Bool(_))
            | (Schema::Int, Value::Int(_))
            | (Schema::Float, Value::Float(_)) => true,
            (Schema::List(element), Value::List(items))
            | (Schema::Set(element), Value::Set(items)) => {
                items.iter().all(|item| item.conforms_to(element))
            }
            _ => false,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, unordered sets)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => multiset_eq(a, b),

            // Different types: NEVER equal (NO TYPE COERCION)
            _ => false,
        }
    }
}

// Pairs every element of `a` with a distinct equal element of `b`.
fn multiset_eq(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|item| {
        let slot = b
            .iter()
            .enumerate()
            .position(|(i, candidate)| !used[i] && candidate == item);
        match slot {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
