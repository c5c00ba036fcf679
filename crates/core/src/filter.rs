//! Filter operands
//!
//! A filter is either a plain [`Value`] (equality, substring and relational
//! modes) or a compiled regular expression (regex mode). Patterns are compiled
//! once up front so the matcher never touches pattern source text.

use crate::error::{Result, SiftError};
use crate::value::Value;
use regex::Regex;

/// Right-hand side of a match
#[derive(Debug, Clone)]
pub enum FilterValue {
    /// Literal operand, shaped like the scalar schema being matched
    Value(Value),
    /// Precompiled regular expression
    Pattern(Regex),
}

impl FilterValue {
    /// Compile `pattern` into a regex operand
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(FilterValue::Pattern)
            .map_err(|e| SiftError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Shape name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::Value(v) => v.type_name(),
            FilterValue::Pattern(_) => "Pattern",
        }
    }

    /// Literal operand, if this is one
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FilterValue::Value(v) => Some(v),
            FilterValue::Pattern(_) => None,
        }
    }

    /// Compiled pattern, if this is one
    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            FilterValue::Pattern(re) => Some(re),
            FilterValue::Value(_) => None,
        }
    }
}

impl From<Value> for FilterValue {
    fn from(v: Value) -> Self {
        FilterValue::Value(v)
    }
}

impl From<Regex> for FilterValue {
    fn from(re: Regex) -> Self {
        FilterValue::Pattern(re)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Value(Value::from(v))
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Value(Value::Bool(v))
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Value(Value::Int(v))
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Value(Value::Float(v))
    }
}
