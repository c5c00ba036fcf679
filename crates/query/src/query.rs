//! Query: filters then sorts
//!
//! A [`Query`] keeps the records that pass *every* filter (AND across
//! filters) and orders them by its sorts, the first sort being the primary
//! key. Sorting is stable, so records that compare equal on every sort keep
//! their input order.
//!
//! ## Usage
//!
//! ```ignore
//! let query = Query::builder()
//!     .filter(Filter::new("name", ["^web"]).match_by(MatchMode::Regex))
//!     .sort(Sort::desc("cpus"))
//!     .build(&schema)?;
//!
//! let selected = query.apply(records)?;
//! ```

use crate::error::Result;
use crate::filter::{BoundFilter, BoundSort, Direction, Filter, Sort};
use crate::record::{Record, RecordSchema};
use sift_core::{check_orderable, sort_order};
use std::cmp::Ordering;
use tracing::debug;

/// A validated filter/sort pipeline
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<BoundFilter>,
    sorts: Vec<BoundSort>,
}

impl Query {
    /// Start declaring a query
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Number of filters
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Number of sort keys
    pub fn sort_count(&self) -> usize {
        self.sorts.len()
    }

    /// Filters in declaration order
    pub fn filters(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter().map(|bound| &bound.filter)
    }

    /// Sorts in priority order
    pub fn sorts(&self) -> impl Iterator<Item = &Sort> {
        self.sorts.iter().map(|bound| &bound.sort)
    }

    /// Check whether `record` passes every filter
    pub fn accepts(&self, record: &Record) -> Result<bool> {
        for filter in &self.filters {
            if !filter.accepts(record)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Filter then sort `records`
    pub fn apply(&self, records: Vec<Record>) -> Result<Vec<Record>> {
        let total = records.len();
        let mut selected = Vec::with_capacity(total);
        for record in records {
            if self.accepts(&record)? {
                selected.push(record);
            }
        }
        self.sort(&mut selected)?;

        debug!(
            total,
            selected = selected.len(),
            filters = self.filters.len(),
            sorts = self.sorts.len(),
            "applied query"
        );
        Ok(selected)
    }

    /// Stable sort of `records` by this query's sort keys
    ///
    /// Every sort value is checked before any record moves, so on error the
    /// slice is left untouched. Keys are ordered by
    /// [`sort_order`](sift_core::sort_order): floats within tolerance of each
    /// other fall in exact numeric order rather than tying.
    pub fn sort(&self, records: &mut [Record]) -> Result<()> {
        if self.sorts.is_empty() {
            return Ok(());
        }
        for record in records.iter() {
            for bound in &self.sorts {
                if let Some(value) = record.get(bound.sort.attribute()) {
                    check_orderable(&bound.schema, value)?;
                }
            }
        }
        records.sort_by(|a, b| self.compare_records(a, b));
        Ok(())
    }

    fn compare_records(&self, a: &Record, b: &Record) -> Ordering {
        for bound in &self.sorts {
            let attribute = bound.sort.attribute();
            let ordering = match (a.get(attribute), b.get(attribute)) {
                (Some(left), Some(right)) => {
                    let ordering = sort_order(left, right);
                    match bound.sort.direction() {
                        Direction::Asc => ordering,
                        Direction::Desc => ordering.reverse(),
                    }
                }
                // Absent sorts last in either direction
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Declares filters and sorts, then binds them to a [`RecordSchema`]
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    filters: Vec<Filter>,
    sorts: Vec<Sort>,
}

impl QueryBuilder {
    /// Create an empty builder (matches everything, no ordering)
    pub fn new() -> Self {
        QueryBuilder {
            filters: Vec::new(),
            sorts: Vec::new(),
        }
    }

    /// Add a filter
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a sort key (lower priority than previously added keys)
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Validate every clause against `schema`
    ///
    /// # Errors
    ///
    /// - [`QueryError::UnknownAttribute`](crate::QueryError::UnknownAttribute)
    /// - [`QueryError::EmptyFilter`](crate::QueryError::EmptyFilter)
    /// - [`QueryError::Engine`](crate::QueryError::Engine) for operand shape
    ///   mismatches, invalid patterns and sorts over collections
    pub fn build(self, schema: &RecordSchema) -> Result<Query> {
        let filters = self
            .filters
            .into_iter()
            .map(|filter| {
                let attribute = schema.require(filter.attribute())?;
                filter.bind(attribute)
            })
            .collect::<Result<Vec<_>>>()?;

        let sorts = self
            .sorts
            .into_iter()
            .map(|sort| {
                let attribute = schema.require(sort.attribute())?;
                sort.bind(attribute)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(filters = filters.len(), sorts = sorts.len(), "built query");
        Ok(Query { filters, sorts })
    }
}
