// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors raised while parsing or validating a serialized form model
#[derive(Debug, Clone, PartialEq)]
pub enum FormModelError {
    /// The input was not valid JSON, or a field record could not be decoded
    Malformed {
        /// Human readable parser diagnostic
        reason: String,
    },
    /// The top-level value was neither an array nor a versioned document
    NotAnArray {
        /// JSON kind that was found instead ("object", "string", ...)
        found: &'static str,
    },
    /// Two field records share the same id
    DuplicateFieldId {
        /// The duplicate field id
        field_id: String,
    },
    /// The versioned document was written by a newer producer
    UnsupportedSchemaVersion {
        /// Version found in the document
        found: u32,
        /// Highest version this build understands
        supported: u32,
    },
}

impl FormModelError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        FormModelError::Malformed {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FormModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormModelError::Malformed { reason } => {
                write!(f, "Malformed form model: {}", reason)
            }
            FormModelError::NotAnArray { found } => {
                write!(
                    f,
                    "Malformed form model: expected an array of fields, found {}",
                    found
                )
            }
            FormModelError::DuplicateFieldId { field_id } => {
                write!(f, "Malformed form model: duplicate field id '{}'", field_id)
            }
            FormModelError::UnsupportedSchemaVersion { found, supported } => {
                write!(
                    f,
                    "Unsupported form schema version {} (this build supports up to {})",
                    found, supported
                )
            }
        }
    }
}

impl std::error::Error for FormModelError {}

impl From<serde_json::Error> for FormModelError {
    fn from(e: serde_json::Error) -> Self {
        FormModelError::malformed(e.to_string())
    }
}
