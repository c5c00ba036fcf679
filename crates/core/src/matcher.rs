//! Value matcher
//!
//! Decides whether a value satisfies a filter under a [`MatchMode`].
//!
//! ## Dispatch
//!
//! | Schema | Modes honoured | Fallback |
//! |--------|----------------|----------|
//! | String | substring, regex | case-insensitive equality |
//! | Bool | none | exact equality |
//! | Int | four relational modes | exact equality |
//! | Float | four relational modes | tolerant equality |
//! | List / Set | all (forwarded to elements) | OR over elements |
//!
//! A mode the type does not honour is not an error: the matcher silently uses
//! the fallback. Float relational modes never match a zero value
//! (zero-as-absent).

use crate::error::{Result, SiftError};
use crate::filter::FilterValue;
use crate::float::{approx_eq, is_absent};
use crate::mode::MatchMode;
use crate::schema::{Schema, TypeTag};
use crate::value::Value;
use tracing::trace;
use unicase::UniCase;

/// Check whether `value` satisfies `filter` under `mode`
///
/// `value` must conform to `schema`; for collections `filter` is shaped like
/// the innermost scalar schema and is applied to every element. An empty
/// collection never matches.
///
/// # Errors
///
/// [`SiftError::TypeMismatch`] when the value or the filter disagrees with
/// the schema (a caller bug, never a soft failure).
/// Collections are checked in full, so the error does not depend on element
/// order.
pub fn matches(
    schema: &Schema,
    value: &Value,
    filter: &FilterValue,
    mode: MatchMode,
) -> Result<bool> {
    match schema {
        Schema::String => match value {
            Value::String(v) => match_string(v, filter, mode),
            other => Err(SiftError::type_mismatch(TypeTag::String, other.type_name())),
        },
        Schema::Bool => match (value, filter) {
            (Value::Bool(v), FilterValue::Value(Value::Bool(f))) => {
                log_fallback(TypeTag::Bool, mode, mode != MatchMode::Equals);
                Ok(v == f)
            }
            (Value::Bool(_), other) => {
                Err(SiftError::type_mismatch(TypeTag::Bool, other.type_name()))
            }
            (other, _) => Err(SiftError::type_mismatch(TypeTag::Bool, other.type_name())),
        },
        Schema::Int => match (value, filter) {
            (Value::Int(v), FilterValue::Value(Value::Int(f))) => Ok(match_int(*v, *f, mode)),
            (Value::Int(_), other) => {
                Err(SiftError::type_mismatch(TypeTag::Int, other.type_name()))
            }
            (other, _) => Err(SiftError::type_mismatch(TypeTag::Int, other.type_name())),
        },
        Schema::Float => match (value, filter) {
            (Value::Float(v), FilterValue::Value(Value::Float(f))) => {
                Ok(match_float(*v, *f, mode))
            }
            (Value::Float(_), other) => {
                Err(SiftError::type_mismatch(TypeTag::Float, other.type_name()))
            }
            (other, _) => Err(SiftError::type_mismatch(TypeTag::Float, other.type_name())),
        },
        Schema::List(element) => match value {
            Value::List(items) => any_element(element, items, filter, mode),
            other => Err(SiftError::type_mismatch(TypeTag::List, other.type_name())),
        },
        Schema::Set(element) => match value {
            Value::Set(items) => any_element(element, items, filter, mode),
            other => Err(SiftError::type_mismatch(TypeTag::Set, other.type_name())),
        },
    }
}

// OR over elements, short-circuiting on the first match. Every element is
// shape-checked first so a mistyped one is reported wherever it sits.
fn any_element(
    element: &Schema,
    items: &[Value],
    filter: &FilterValue,
    mode: MatchMode,
) -> Result<bool> {
    if let Some(bad) = items.iter().find(|item| !item.conforms_to(element)) {
        return Err(SiftError::type_mismatch(element.type_tag(), bad.type_name()));
    }
    for item in items {
        if matches(element, item, filter, mode)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn match_string(value: &str, filter: &FilterValue, mode: MatchMode) -> Result<bool> {
    match (mode, filter) {
        (MatchMode::Regex, FilterValue::Pattern(re)) => Ok(re.is_match(value)),
        (MatchMode::Regex, other) => Err(SiftError::TypeMismatch {
            expected: "Pattern",
            actual: other.type_name(),
        }),
        (MatchMode::Substring, FilterValue::Value(Value::String(f))) => {
            Ok(value.contains(f.as_str()))
        }
        (_, FilterValue::Value(Value::String(f))) => {
            log_fallback(TypeTag::String, mode, mode != MatchMode::Equals);
            Ok(eq_ignore_case(value, f))
        }
        (_, other) => Err(SiftError::type_mismatch(TypeTag::String, other.type_name())),
    }
}

fn match_int(value: i64, filter: i64, mode: MatchMode) -> bool {
    match mode {
        MatchMode::LessThan => value < filter,
        MatchMode::LessThanOrEqual => value <= filter,
        MatchMode::GreaterThan => value > filter,
        MatchMode::GreaterThanOrEqual => value >= filter,
        _ => {
            log_fallback(TypeTag::Int, mode, mode.is_textual());
            value == filter
        }
    }
}

fn match_float(value: f64, filter: f64, mode: MatchMode) -> bool {
    if mode.is_relational() && is_absent(value) {
        return false;
    }
    match mode {
        MatchMode::LessThan => value < filter,
        MatchMode::LessThanOrEqual => value < filter || approx_eq(filter, value),
        MatchMode::GreaterThan => value > filter,
        MatchMode::GreaterThanOrEqual => value > filter || approx_eq(filter, value),
        _ => {
            log_fallback(TypeTag::Float, mode, mode.is_textual());
            approx_eq(filter, value)
        }
    }
}

// Unicode case folding, so `Σ`/`ς` and `ſ`/`S` agree.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    UniCase::new(a) == UniCase::new(b)
}

fn log_fallback(type_tag: TypeTag, mode: MatchMode, unsupported: bool) {
    if unsupported {
        trace!(%type_tag, %mode, "match mode not supported for type, using equality");
    }
}
