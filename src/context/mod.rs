//! Data context for template rendering.
//!
//! A [`Context`] maps field names to either a scalar string or an ordered
//! sequence of rows. Rows are flat maps of already-stringified values, which
//! is all the block syntax needs: one level of array-of-object.
//!
//! Lookups return `Option`; the renderer maps absence to an empty string.

mod convert;


use crate::error::{NoticeError, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;

/// One element of a row sequence: field name to stringified value.
pub type Row = BTreeMap<String, String>;

/// A context field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A scalar, already in its display form.
    Scalar(String),
    /// An ordered sequence of rows, expanded by `{{#key}}...{{/key}}` blocks.
    Rows(Vec<Row>),
}

/// Field lookup table supplied to [`crate::template::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    fields: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Builder-style scalar insert.
    pub fn with_scalar(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, Value::Scalar(value.into()));
        self
    }

    /// Builder-style row sequence insert.
    pub fn with_rows(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.insert(name, Value::Rows(rows));
        self
    }

    /// Look up a field of any kind.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a scalar field. Row sequences are not scalars.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a row sequence field. Scalars are not row sequences.
    pub fn rows(&self, name: &str) -> Option<&[Row]> {
        match self.fields.get(name) {
            Some(Value::Rows(rows)) => Some(rows),
            _ => None,
        }
    }

    /// Build a context from a JSON value.
    ///
    /// The top level must be an object. `null` fields are dropped, arrays
    /// become row sequences, and everything else becomes a scalar.
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let JsonValue::Object(map) = value else {
            return Err(NoticeError::UserError(format!(
                "context must be a JSON object, got {}",
                convert::kind_name(&value)
            )));
        };

        let mut ctx = Context::new();
        for (name, field) in map {
            if let Some(value) = convert::field_value(&field) {
                ctx.insert(name, value);
            }
        }
        Ok(ctx)
    }

    /// Build a context from any serializable value (through its JSON form).
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_value(value).map_err(|e| {
            NoticeError::UserError(format!("failed to convert value to context: {}", e))
        })?;
        Self::from_json(json)
    }

    /// Parse a context from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: JsonValue = serde_json::from_str(text)
            .map_err(|e| NoticeError::UserError(format!("failed to parse context JSON: {}", e)))?;
        Self::from_json(json)
    }

    /// Load a context from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            NoticeError::IoError(format!(
                "failed to read context file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&text)
    }
}
