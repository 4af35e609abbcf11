// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for design-surface events.
//!
//! This module contains message types for logging events related to:
//! * Adding, editing and deleting fields
//! * Reordering through drag and drop
//! * Importing and clearing the form model
//! * Running out of generated field ids
//! * Declined confirmations

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A field was appended to the form model.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FieldAdded<'a> {
    pub field_id: &'a str,
    pub type_id: &'a str,
    pub field_count: usize,
}

impl Display for FieldAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Field '{}' of type '{}' added ({} fields)",
            self.field_id, self.type_id, self.field_count
        )
    }
}

impl StructuredLog for FieldAdded<'_> {
    fn log(&self) {
        tracing::info!(
            field_id = self.field_id,
            type_id = self.type_id,
            field_count = self.field_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "field_added",
            span_name = name,
            field_id = self.field_id,
            type_id = self.type_id,
        )
    }
}

/// An edit session was committed or discarded.
///
/// # Log Level
/// `info!` when saved, `debug!` when discarded
pub struct FieldEdited<'a> {
    pub field_id: &'a str,
    pub saved: bool,
}

impl Display for FieldEdited<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.saved {
            write!(f, "Field '{}' updated", self.field_id)
        } else {
            write!(f, "Edits to field '{}' discarded", self.field_id)
        }
    }
}

impl StructuredLog for FieldEdited<'_> {
    fn log(&self) {
        if self.saved {
            tracing::info!(field_id = self.field_id, saved = true, "{}", self);
        } else {
            tracing::debug!(field_id = self.field_id, saved = false, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "field_edited",
            span_name = name,
            field_id = self.field_id,
            saved = self.saved,
        )
    }
}

/// A field was removed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FieldDeleted<'a> {
    pub field_id: &'a str,
    pub remaining: usize,
}

impl Display for FieldDeleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Field '{}' deleted ({} remaining)",
            self.field_id, self.remaining
        )
    }
}

impl StructuredLog for FieldDeleted<'_> {
    fn log(&self) {
        tracing::info!(
            field_id = self.field_id,
            remaining = self.remaining,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "field_deleted",
            span_name = name,
            field_id = self.field_id,
            remaining = self.remaining,
        )
    }
}

/// A field changed position.
///
/// # Log Level
/// `debug!` - Frequent UI event
pub struct FieldMoved<'a> {
    pub field_id: &'a str,
    pub from: usize,
    pub to: usize,
}

impl Display for FieldMoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Field '{}' moved from position {} to {}",
            self.field_id, self.from, self.to
        )
    }
}

impl StructuredLog for FieldMoved<'_> {
    fn log(&self) {
        tracing::debug!(
            field_id = self.field_id,
            from = self.from,
            to = self.to,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "field_moved",
            span_name = name,
            field_id = self.field_id,
            from = self.from,
            to = self.to,
        )
    }
}

/// An import is about to replace the form model.
///
/// # Log Level
/// `debug!` - Opens the `import` span
pub struct FormImportStarted {
    pub current_fields: usize,
}

impl Display for FormImportStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Importing form over {} existing fields", self.current_fields)
    }
}

impl StructuredLog for FormImportStarted {
    fn log(&self) {
        tracing::debug!(current_fields = self.current_fields, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "form_import_started",
            span_name = name,
            current_fields = self.current_fields,
        )
    }
}

/// The form model was replaced by an import.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FormImported {
    pub field_count: usize,
    /// Highest generated id suffix now reserved
    pub id_counter: u64,
}

impl Display for FormImported {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Imported form with {} fields, ids reserved up to field-{}",
            self.field_count, self.id_counter
        )
    }
}

impl StructuredLog for FormImported {
    fn log(&self) {
        tracing::info!(
            field_count = self.field_count,
            id_counter = self.id_counter,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "form_imported",
            span_name = name,
            field_count = self.field_count,
        )
    }
}

/// No further `field-N` id can be generated.
///
/// # Log Level
/// `warn!` - The field is not added
pub struct FieldIdsExhausted<'a> {
    pub type_id: &'a str,
    pub id_counter: u64,
}

impl Display for FieldIdsExhausted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cannot add field of type '{}': ids are exhausted at field-{}",
            self.type_id, self.id_counter
        )
    }
}

impl StructuredLog for FieldIdsExhausted<'_> {
    fn log(&self) {
        tracing::warn!(
            type_id = self.type_id,
            id_counter = self.id_counter,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "field_ids_exhausted",
            span_name = name,
            type_id = self.type_id,
        )
    }
}

/// Every field was removed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FormCleared {
    pub removed: usize,
}

impl Display for FormCleared {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cleared {} fields from the form", self.removed)
    }
}

impl StructuredLog for FormCleared {
    fn log(&self) {
        tracing::info!(removed = self.removed, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "form_cleared",
            span_name = name,
            removed = self.removed,
        )
    }
}

/// The user answered no to a destructive operation.
///
/// # Log Level
/// `debug!` - Expected user choice
pub struct ConfirmationDeclined<'a> {
    pub action: &'a str,
}

impl Display for ConfirmationDeclined<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Confirmation declined for '{}'", self.action)
    }
}

impl StructuredLog for ConfirmationDeclined<'_> {
    fn log(&self) {
        tracing::debug!(action = self.action, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "confirmation_declined",
            span_name = name,
            action = self.action,
        )
    }
}

/// `disabled_fields` names a type that is not registered.
///
/// # Log Level
/// `warn!` - Probable configuration mistake
pub struct DisabledFieldUnknown<'a> {
    pub type_id: &'a str,
}

impl Display for DisabledFieldUnknown<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "disabled_fields entry '{}' does not name a registered field type",
            self.type_id
        )
    }
}

impl StructuredLog for DisabledFieldUnknown<'_> {
    fn log(&self) {
        tracing::warn!(type_id = self.type_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "disabled_field_unknown",
            span_name = name,
            type_id = self.type_id,
        )
    }
}
