//! Declarative query configuration
//!
//! A query can be described in TOML (or the equivalent JSON) alongside the
//! record schema it runs against:
//!
//! ```toml
//! [schema]
//! name = "string"
//! cpus = "int"
//! tags = { set = "string" }
//!
//! [[filter]]
//! attribute = "name"
//! values = ["^web"]
//! match_by = "re"
//!
//! [[sort]]
//! attribute = "cpus"
//! direction = "desc"
//! ```
//!
//! Filter values are raw documents until [`QueryConfig::compile`] decodes
//! them against the attribute's scalar schema. Unknown type names and unknown
//! keys are rejected at parse time; unknown match modes fall back to equality.

use crate::error::{QueryError, Result};
use crate::filter::{Direction, Filter, Sort};
use crate::query::Query;
use crate::record::{decode_value, RecordSchema};
use serde::{Deserialize, Serialize};
use sift_core::MatchMode;
use tracing::{debug, error};

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Declared attribute types
    #[serde(default)]
    pub schema: RecordSchema,

    /// Filters, ANDed together
    #[serde(default, rename = "filter")]
    pub filters: Vec<FilterConfig>,

    /// Sort keys in priority order
    #[serde(default, rename = "sort")]
    pub sorts: Vec<SortConfig>,
}

/// One `[[filter]]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Attribute to filter
    pub attribute: String,
    /// Raw operands, decoded against the attribute's scalar schema
    pub values: Vec<serde_json::Value>,
    /// Match mode name; unknown names mean equality
    #[serde(default)]
    pub match_by: MatchMode,
    /// Require every value to match
    #[serde(default)]
    pub all: bool,
}

/// One `[[sort]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    /// Attribute to sort by
    pub attribute: String,
    /// Defaults to ascending
    #[serde(default)]
    pub direction: Direction,
}

impl QueryConfig {
    /// Parse a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| {
            error!(error = %e, "failed to parse query config");
            QueryError::from(e)
        })
    }

    /// Parse a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| {
            error!(error = %e, "failed to parse query config");
            QueryError::from(e)
        })
    }

    /// Decode filter operands and build the query
    ///
    /// Returns the record schema alongside the query so callers can decode
    /// records with the same declarations the query was bound to.
    pub fn compile(self) -> Result<(RecordSchema, Query)> {
        let mut builder = Query::builder();

        for filter in self.filters {
            let scalar = self.schema.require(&filter.attribute)?.scalar();
            let values = filter
                .values
                .iter()
                .map(|raw| decode_value(scalar, raw))
                .collect::<sift_core::Result<Vec<_>>>()
                .map_err(|source| QueryError::Decode {
                    attribute: filter.attribute.clone(),
                    source,
                })?;

            builder = builder.filter(
                Filter::new(filter.attribute, values)
                    .match_by(filter.match_by)
                    .all(filter.all),
            );
        }

        for sort in self.sorts {
            builder = builder.sort(Sort::new(sort.attribute, sort.direction));
        }

        let query = builder.build(&self.schema)?;
        debug!(
            attributes = self.schema.len(),
            filters = query.filter_count(),
            sorts = query.sort_count(),
            "compiled query config"
        );
        Ok((self.schema, query))
    }
}
