//! Value comparator
//!
//! Orders two values of the same scalar schema. Collections have no order;
//! asking for one is a caller bug reported as [`SiftError::Unorderable`].
//!
//! Ordering rules:
//! 1. String: lexicographic byte order
//! 2. Bool: `false < true`
//! 3. Int: numeric
//! 4. Float: tolerant equality first, numeric otherwise; NaN is rejected

use crate::error::{Result, SiftError};
use crate::float::approx_eq;
use crate::schema::{Schema, TypeTag};
use crate::value::Value;
use std::cmp::Ordering;

/// Three-way comparison of two values declared by `schema`
///
/// # Errors
///
/// - [`SiftError::Unorderable`] for `List` and `Set` schemas
/// - [`SiftError::InvalidInput`] when either float is NaN
/// - [`SiftError::TypeMismatch`] when a value disagrees with the schema
pub fn compare(schema: &Schema, left: &Value, right: &Value) -> Result<Ordering> {
    match schema {
        Schema::String => match (left, right) {
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            _ => Err(mismatch(TypeTag::String, left, right)),
        },
        Schema::Bool => match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
            _ => Err(mismatch(TypeTag::Bool, left, right)),
        },
        Schema::Int => match (left, right) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            _ => Err(mismatch(TypeTag::Int, left, right)),
        },
        Schema::Float => match (left, right) {
            (Value::Float(a), Value::Float(b)) => compare_float(*a, *b),
            _ => Err(mismatch(TypeTag::Float, left, right)),
        },
        Schema::List(_) | Schema::Set(_) => Err(SiftError::Unorderable {
            type_tag: schema.type_tag(),
        }),
    }
}

/// [`compare`] as a sign: `-1`, `0` or `1`
pub fn compare_sign(schema: &Schema, left: &Value, right: &Value) -> Result<i32> {
    compare(schema, left, right).map(|ordering| ordering as i32)
}

/// Stable in-place sort of `values` consistent with [`compare`]
///
/// The schema and every value are validated before any element moves, so on
/// error the slice is left untouched. Elements are arranged by
/// [`sort_order`], so adjacent elements never compare `Greater`.
pub fn sort_values(schema: &Schema, values: &mut [Value]) -> Result<()> {
    if !schema.is_orderable() {
        return Err(SiftError::Unorderable {
            type_tag: schema.type_tag(),
        });
    }
    for value in values.iter() {
        check_orderable(schema, value)?;
    }
    values.sort_by(sort_order);
    Ok(())
}

/// Strict total order over values that passed [`check_orderable`]
///
/// Tolerant float equality is not transitive (`0 ≈ 4e-7 ≈ 8e-7` but
/// `0 < 8e-7`), so it cannot drive a sort. This order agrees with
/// [`compare`] whenever `compare` is not `Equal` and splits tolerance ties
/// by exact numeric order.
pub fn sort_order(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
        // Unreachable after validation against a single scalar schema.
        _ => tag_rank(left.type_tag()).cmp(&tag_rank(right.type_tag())),
    }
}

fn tag_rank(tag: TypeTag) -> usize {
    TypeTag::ALL.iter().position(|t| *t == tag).unwrap_or(TypeTag::ALL.len())
}

/// Check that `value` can take part in an ordering under `schema`
///
/// A value that passes can be handed to [`compare`] against any other value
/// that passes, and the comparison will not fail.
pub fn check_orderable(schema: &Schema, value: &Value) -> Result<()> {
    if !schema.is_orderable() {
        return Err(SiftError::Unorderable {
            type_tag: schema.type_tag(),
        });
    }
    if !value.conforms_to(schema) {
        return Err(SiftError::type_mismatch(schema.type_tag(), value.type_name()));
    }
    if value.as_float().is_some_and(f64::is_nan) {
        return Err(nan_error());
    }
    Ok(())
}

fn compare_float(a: f64, b: f64) -> Result<Ordering> {
    if a.is_nan() || b.is_nan() {
        return Err(nan_error());
    }
    if approx_eq(a, b) {
        return Ok(Ordering::Equal);
    }
    // Total once NaN is excluded.
    Ok(a.partial_cmp(&b).unwrap_or(Ordering::Equal))
}

fn nan_error() -> SiftError {
    SiftError::InvalidInput {
        message: "NaN has no sort order".to_string(),
    }
}

// Report whichever side disagrees with the declared type.
fn mismatch(expected: TypeTag, left: &Value, right: &Value) -> SiftError {
    let offender = if left.type_tag() != expected { left } else { right };
    SiftError::type_mismatch(expected, offender.type_name())
}
