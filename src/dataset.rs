//! In-memory record collection.
//!
//! A [`Dataset`] owns a record schema and the records decoded against it, so
//! every record a query sees is already well-typed.

use crate::error::Result;
use sift_query::{Query, QueryConfig, Record, RecordSchema};
use tracing::{debug, error};

/// Typed records plus their schema.
///
/// # Example
///
/// ```
/// use sift::prelude::*;
///
/// let schema = RecordSchema::new()
///     .with("name", Schema::String)
///     .with("price", Schema::Float);
///
/// let mut data = Dataset::new(schema);
/// data.insert_json(&json!({"name": "a", "price": 0.0})).unwrap();
/// data.insert_json(&json!({"name": "b", "price": 3.5})).unwrap();
///
/// let query = Query::builder()
///     .filter(Filter::new("price", [5.0]).match_by(MatchMode::LessThan))
///     .build(data.schema())
///     .unwrap();
///
/// // Zero is treated as "no price", so only `b` qualifies.
/// assert_eq!(data.select(&query).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    schema: RecordSchema,
    records: Vec<Record>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new(schema: RecordSchema) -> Self {
        Dataset {
            schema,
            records: Vec::new(),
        }
    }

    /// Decode a JSON array of objects.
    pub fn from_json_str(schema: RecordSchema, input: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(input).map_err(|e| {
            error!(error = %e, "failed to parse dataset");
            e
        })?;

        let mut dataset = Dataset::new(schema);
        dataset.records.reserve(raw.len());
        for (index, item) in raw.iter().enumerate() {
            dataset.insert_json(item).map_err(|e| {
                error!(index, error = %e, "failed to decode record");
                e
            })?;
        }
        debug!(records = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Schema records are decoded against.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add an already-typed record after validating it.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        self.schema.validate_record(&record)?;
        self.records.push(record);
        Ok(())
    }

    /// Decode and add a JSON object.
    pub fn insert_json(&mut self, raw: &serde_json::Value) -> Result<()> {
        let record = self.schema.decode_record(raw)?;
        self.records.push(record);
        Ok(())
    }

    /// Run `query`, returning matching records in query order.
    ///
    /// The dataset itself is not reordered.
    pub fn select(&self, query: &Query) -> Result<Vec<Record>> {
        Ok(query.apply(self.records.clone())?)
    }

    /// Run a TOML query document against this dataset.
    ///
    /// Attributes the document declares in its `[schema]` table must agree
    /// with the dataset's schema; undeclared ones are taken from the dataset.
    pub fn select_toml(&self, input: &str) -> Result<Vec<Record>> {
        let mut config = QueryConfig::from_toml_str(input)?;
        for (name, schema) in self.schema.iter() {
            match config.schema.attribute(name) {
                Some(declared) if declared != schema => {
                    return Err(crate::Error::Config(format!(
                        "attribute {} declared as {} but dataset holds {}",
                        name, declared, schema
                    )));
                }
                Some(_) => {}
                None => {
                    config.schema.insert(name, schema.clone());
                }
            }
        }
        let (_, query) = config.compile()?;
        self.select(&query)
    }
}
