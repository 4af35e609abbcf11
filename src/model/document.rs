// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Serialized form of a [`FormModel`](crate::model::FormModel).
//!
//! The exchange format is a JSON array of field records. A versioned envelope
//! (`{"schema_version": 1, "fields": [...]}`) is also accepted on input and
//! produced by [`FormDocument`], so that later producers can signal format
//! changes. Anything else fails fast with a [`FormModelError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::consts::FORM_SCHEMA_VERSION;
use crate::errors::FormModelError;
use crate::model::{FieldData, FormModel};

/// Versioned envelope around a field sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    pub schema_version: u32,
    pub fields: Vec<FieldData>,
}

impl FormDocument {
    pub fn from_model(model: &FormModel) -> Self {
        Self {
            schema_version: FORM_SCHEMA_VERSION,
            fields: model.fields().to_vec(),
        }
    }
}

/// Anything a builder or renderer can load a form from.
#[derive(Debug, Clone)]
pub enum FormSource {
    /// JSON text: a bare array or a versioned document
    Json(String),
    /// Already-parsed JSON
    Value(Value),
    /// Structured field records
    Fields(Vec<FieldData>),
}

impl From<&str> for FormSource {
    fn from(s: &str) -> Self {
        FormSource::Json(s.to_string())
    }
}

impl From<String> for FormSource {
    fn from(s: String) -> Self {
        FormSource::Json(s)
    }
}

impl From<Value> for FormSource {
    fn from(v: Value) -> Self {
        FormSource::Value(v)
    }
}

impl From<Vec<FieldData>> for FormSource {
    fn from(fields: Vec<FieldData>) -> Self {
        FormSource::Fields(fields)
    }
}

impl From<&FormModel> for FormSource {
    fn from(model: &FormModel) -> Self {
        FormSource::Fields(model.fields().to_vec())
    }
}

impl From<FormDocument> for FormSource {
    fn from(doc: FormDocument) -> Self {
        FormSource::Fields(doc.fields)
    }
}

impl FormSource {
    /// Parses and validates the source into a model.
    pub fn into_model(self) -> Result<FormModel, FormModelError> {
        let fields = match self {
            FormSource::Fields(fields) => fields,
            FormSource::Json(text) => {
                let value: Value = serde_json::from_str(&text)?;
                fields_from_value(value)?
            }
            FormSource::Value(value) => fields_from_value(value)?,
        };
        FormModel::from_fields(fields)
    }
}

fn fields_from_value(value: Value) -> Result<Vec<FieldData>, FormModelError> {
    match value {
        Value::Array(items) => decode_fields(items),
        Value::Object(mut map) if map.contains_key("schema_version") => {
            let version = map
                .get("schema_version")
                .and_then(Value::as_u64)
                .ok_or_else(|| {
                    FormModelError::malformed("schema_version must be a non-negative integer")
                })?;
            let version = u32::try_from(version).unwrap_or(u32::MAX);
            if version > FORM_SCHEMA_VERSION {
                return Err(FormModelError::UnsupportedSchemaVersion {
                    found: version,
                    supported: FORM_SCHEMA_VERSION,
                });
            }
            match map.remove("fields") {
                Some(Value::Array(items)) => decode_fields(items),
                Some(other) => Err(FormModelError::NotAnArray {
                    found: kind_of(&other),
                }),
                None => Err(FormModelError::malformed("document has no 'fields' entry")),
            }
        }
        other => Err(FormModelError::NotAnArray {
            found: kind_of(&other),
        }),
    }
}

fn decode_fields(items: Vec<Value>) -> Result<Vec<FieldData>, FormModelError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| FormModelError::malformed(format!("field at index {}: {}", index, e)))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
