//! Records and record schemas
//!
//! A record is a flat attribute → value map. Its [`RecordSchema`] declares the
//! type of every attribute the query layer may filter or sort on. Raw data
//! arrives as JSON (or TOML converted to JSON) and is decoded against the
//! schema here, so the engine only ever sees well-typed values.

use crate::error::{QueryError, Result};
use serde::{Deserialize, Serialize};
use sift_core::{Schema, SiftError, Value};
use std::collections::{BTreeMap, HashMap};

/// Attribute name → value
///
/// Attributes missing from a record are treated as absent: they never match a
/// filter and sort after every present value.
pub type Record = HashMap<String, Value>;

/// Attribute name → declared schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSchema {
    attributes: BTreeMap<String, Schema>,
}

impl RecordSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        RecordSchema {
            attributes: BTreeMap::new(),
        }
    }

    /// Declare an attribute (builder style)
    pub fn with(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.attributes.insert(name.into(), schema);
        self
    }

    /// Declare an attribute, returning the schema it replaced
    pub fn insert(&mut self, name: impl Into<String>, schema: Schema) -> Option<Schema> {
        self.attributes.insert(name.into(), schema)
    }

    /// Schema of `name`, if declared
    pub fn attribute(&self, name: &str) -> Option<&Schema> {
        self.attributes.get(name)
    }

    /// Schema of `name`, or [`QueryError::UnknownAttribute`]
    pub fn require(&self, name: &str) -> Result<&Schema> {
        self.attribute(name)
            .ok_or_else(|| QueryError::UnknownAttribute(name.to_string()))
    }

    /// Declared attributes in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.attributes.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Number of declared attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if no attributes are declared
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Decode a JSON object into a typed record
    ///
    /// `null` attributes are dropped (absent). Keys the schema does not
    /// declare are rejected.
    pub fn decode_record(&self, raw: &serde_json::Value) -> Result<Record> {
        let Some(object) = raw.as_object() else {
            return Err(QueryError::Decode {
                attribute: "<record>".to_string(),
                source: SiftError::TypeMismatch {
                    expected: "Object",
                    actual: json_type_name(raw),
                },
            });
        };

        let mut record = Record::with_capacity(object.len());
        for (name, raw_value) in object {
            let schema = self.require(name)?;
            if raw_value.is_null() {
                continue;
            }
            let value = decode_value(schema, raw_value).map_err(|source| QueryError::Decode {
                attribute: name.clone(),
                source,
            })?;
            record.insert(name.clone(), value);
        }
        Ok(record)
    }

    /// Check that every present attribute of `record` is declared and
    /// conforms to its schema
    pub fn validate_record(&self, record: &Record) -> Result<()> {
        for (name, value) in record {
            let schema = self.require(name)?;
            if !value.conforms_to(schema) {
                return Err(QueryError::Decode {
                    attribute: name.clone(),
                    source: SiftError::TypeMismatch {
                        expected: schema.type_tag().name(),
                        actual: value.type_name(),
                    },
                });
            }
        }
        Ok(())
    }
}

/// Decode a raw JSON value against `schema`
///
/// Integers must be whole JSON numbers that fit in `i64`; floats accept any
/// JSON number. Sets drop duplicate elements, keeping the first occurrence.
pub fn decode_value(schema: &Schema, raw: &serde_json::Value) -> sift_core::Result<Value> {
    use serde_json::Value as Json;

    match (schema, raw) {
        (Schema::String, Json::String(s)) => Ok(Value::String(s.clone())),
        (Schema::Bool, Json::Bool(b)) => Ok(Value::Bool(*b)),
        (Schema::Int, Json::Number(n)) => match n.as_i64() {
            Some(i) => Ok(Value::Int(i)),
            None if n.is_u64() => Err(SiftError::InvalidInput {
                message: format!("integer {} does not fit in i64", n),
            }),
            None => Err(SiftError::InvalidInput {
                message: format!("expected a whole number, got {}", n),
            }),
        },
        (Schema::Float, Json::Number(n)) => n.as_f64().map(Value::Float).ok_or_else(|| {
            SiftError::InvalidInput {
                message: format!("number {} is not representable as f64", n),
            }
        }),
        (Schema::List(element), Json::Array(items)) => items
            .iter()
            .map(|item| decode_value(element, item))
            .collect::<sift_core::Result<Vec<_>>>()
            .map(Value::List),
        (Schema::Set(element), Json::Array(items)) => {
            // Quadratic: `Value` has no `Hash` (floats, multiset equality).
            // Attribute sets are small; revisit if large sets show up.
            let mut unique: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                let value = decode_value(element, item)?;
                if !unique.contains(&value) {
                    unique.push(value);
                }
            }
            Ok(Value::Set(unique))
        }
        (schema, raw) => Err(SiftError::TypeMismatch {
            expected: schema.type_tag().name(),
            actual: json_type_name(raw),
        }),
    }
}

fn json_type_name(raw: &serde_json::Value) -> &'static str {
    use serde_json::Value as Json;

    match raw {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
