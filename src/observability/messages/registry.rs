// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the field type registry.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A field type was added to (or replaced in) a registry.
///
/// # Log Level
/// `debug!` - Setup detail
pub struct FieldTypeRegistered<'a> {
    pub type_id: &'a str,
    pub replaced: bool,
}

impl Display for FieldTypeRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.replaced {
            write!(f, "Field type '{}' re-registered, previous descriptor replaced", self.type_id)
        } else {
            write!(f, "Field type '{}' registered", self.type_id)
        }
    }
}

impl StructuredLog for FieldTypeRegistered<'_> {
    fn log(&self) {
        tracing::debug!(type_id = self.type_id, replaced = self.replaced, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "field_type_registered",
            span_name = name,
            type_id = self.type_id,
            replaced = self.replaced,
        )
    }
}

/// A field referenced a type id the registry does not know.
///
/// # Log Level
/// `warn!` - Degraded rendering, placeholder substituted
///
/// # Example
/// ```
/// use dynamic_forms::observability::messages::registry::FieldTypeNotFound;
///
/// let msg = FieldTypeNotFound {
///     type_id: "rating",
///     field_id: Some("field-4"),
///     context: "preview",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct FieldTypeNotFound<'a> {
    pub type_id: &'a str,
    pub field_id: Option<&'a str>,
    pub context: &'a str,
}

impl Display for FieldTypeNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.field_id {
            Some(field_id) => write!(
                f,
                "Field type \"{}\" not found in registry ({} of '{}')",
                self.type_id, self.context, field_id
            ),
            None => write!(
                f,
                "Field type \"{}\" not found in registry ({})",
                self.type_id, self.context
            ),
        }
    }
}

impl StructuredLog for FieldTypeNotFound<'_> {
    fn log(&self) {
        tracing::warn!(
            type_id = self.type_id,
            field_id = self.field_id.unwrap_or(""),
            context = self.context,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "field_type_not_found",
            span_name = name,
            type_id = self.type_id,
            context = self.context,
        )
    }
}
