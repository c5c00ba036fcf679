//! Filter and sort clauses
//!
//! Clauses are declared against attribute names and bound to the attribute's
//! schema when the query is built. Binding is where mistakes surface: unknown
//! attributes, empty filters, operands of the wrong shape, bad regexes and
//! sorts over collections are all rejected before any record is touched.

use crate::error::{QueryError, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use sift_core::{matches, FilterValue, MatchMode, Schema, SiftError, Value};
use tracing::warn;

/// Attribute filter
///
/// A record passes when *any* of `values` matches the attribute, or when
/// *every* value matches if `all` is set. A record without the attribute
/// never passes.
#[derive(Debug, Clone)]
pub struct Filter {
    attribute: String,
    values: Vec<FilterValue>,
    match_by: MatchMode,
    all: bool,
}

impl Filter {
    /// Filter `attribute` against `values` using the default mode
    pub fn new<V>(attribute: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<FilterValue>,
    {
        Filter {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
            match_by: MatchMode::Equals,
            all: false,
        }
    }

    /// Select the match mode
    pub fn match_by(mut self, mode: MatchMode) -> Self {
        self.match_by = mode;
        self
    }

    /// Require every value to match instead of any
    pub fn all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    /// Attribute this filter applies to
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Operands
    pub fn values(&self) -> &[FilterValue] {
        &self.values
    }

    /// Match mode
    pub fn mode(&self) -> MatchMode {
        self.match_by
    }

    /// Whether every value must match
    pub fn requires_all(&self) -> bool {
        self.all
    }

    /// Validate operands against `schema`, compiling regex operands
    pub(crate) fn bind(self, schema: &Schema) -> Result<BoundFilter> {
        if self.values.is_empty() {
            return Err(QueryError::EmptyFilter(self.attribute));
        }

        let scalar = schema.scalar();
        let regex = self.match_by == MatchMode::Regex && *scalar == Schema::String;
        if !mode_supported(scalar, self.match_by) {
            warn!(
                attribute = %self.attribute,
                mode = %self.match_by,
                schema = %schema,
                "match mode not supported for attribute type, falling back to equality"
            );
        }

        let values = self
            .values
            .into_iter()
            .map(|operand| bind_operand(scalar, operand, regex))
            .collect::<sift_core::Result<Vec<_>>>()?;

        Ok(BoundFilter {
            filter: Filter { values, ..self },
            schema: schema.clone(),
        })
    }
}

fn bind_operand(
    scalar: &Schema,
    operand: FilterValue,
    regex: bool,
) -> sift_core::Result<FilterValue> {
    match operand {
        FilterValue::Value(Value::String(pattern)) if regex => FilterValue::pattern(&pattern),
        FilterValue::Pattern(re) if regex => Ok(FilterValue::Pattern(re)),
        FilterValue::Value(value) if value.conforms_to(scalar) => Ok(FilterValue::Value(value)),
        other => Err(SiftError::TypeMismatch {
            expected: if regex { "Pattern" } else { scalar.type_tag().name() },
            actual: other.type_name(),
        }),
    }
}

// Modes that change behavior for a scalar type; everything else degrades to
// equality inside the matcher.
fn mode_supported(scalar: &Schema, mode: MatchMode) -> bool {
    match (scalar, mode) {
        (_, MatchMode::Equals) => true,
        (Schema::String, m) => m.is_textual(),
        (Schema::Int, m) | (Schema::Float, m) => m.is_relational(),
        _ => false,
    }
}

/// Filter bound to the schema of its attribute
#[derive(Debug, Clone)]
pub(crate) struct BoundFilter {
    pub(crate) filter: Filter,
    pub(crate) schema: Schema,
}

impl BoundFilter {
    pub(crate) fn accepts(&self, record: &Record) -> sift_core::Result<bool> {
        let Some(value) = record.get(&self.filter.attribute) else {
            return Ok(false);
        };
        let mode = self.filter.match_by;

        if self.filter.all {
            for operand in &self.filter.values {
                if !matches(&self.schema, value, operand, mode)? {
                    return Ok(false);
                }
            }
            Ok(true)
        } else {
            for operand in &self.filter.values {
                if matches(&self.schema, value, operand, mode)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// Attribute sort
///
/// Records missing the attribute sort last in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    attribute: String,
    direction: Direction,
}

impl Sort {
    /// Sort by `attribute` in `direction`
    pub fn new(attribute: impl Into<String>, direction: Direction) -> Self {
        Sort {
            attribute: attribute.into(),
            direction,
        }
    }

    /// Ascending sort by `attribute`
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, Direction::Asc)
    }

    /// Descending sort by `attribute`
    pub fn desc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, Direction::Desc)
    }

    /// Attribute to sort by
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Sort direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn bind(self, schema: &Schema) -> Result<BoundSort> {
        if !schema.is_orderable() {
            return Err(SiftError::Unorderable {
                type_tag: schema.type_tag(),
            }
            .into());
        }
        Ok(BoundSort {
            sort: self,
            schema: schema.clone(),
        })
    }
}

/// Sort bound to the schema of its attribute
#[derive(Debug, Clone)]
pub(crate) struct BoundSort {
    pub(crate) sort: Sort,
    pub(crate) schema: Schema,
}
