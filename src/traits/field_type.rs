// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{FieldCategory, FieldData, Property};

/// How the renderer turns a control into submitted entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Display-only element, contributes nothing
    Static,
    /// Free text; always submitted, possibly empty
    Text,
    /// Exactly one option or the empty prompt (select)
    SingleChoice,
    /// At most one option; nothing submitted until chosen (radio group)
    OptionalChoice,
    /// Any number of options, one entry per checked option (checkbox group)
    MultiChoice,
    /// Hidden value filled in by the camera (scanner)
    Capture,
}

/// Native type constraint a control enforces before submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputConstraint {
    #[default]
    None,
    Email,
    Number,
    Date,
}

/// A registered kind of form element.
///
/// Each implementation is a small, self-contained behavior bundle: default
/// data for new fields, two renderers, and the properties the edit modal
/// exposes. Builder and renderer only ever talk to field types through this
/// trait, so adding a type is a registration, not a code change.
pub trait FieldType: Send + Sync {
    fn type_id(&self) -> &str;

    fn display_label(&self) -> &str;

    fn icon(&self) -> &str;

    fn category(&self) -> FieldCategory;

    /// Initial data for a field added with id `field_id`.
    fn default_data(&self, field_id: &str) -> FieldData;

    /// Disabled, non-interactive markup for the design surface.
    fn render_preview(&self, data: &FieldData) -> String;

    /// Live markup for the run-time form.
    fn render_control(&self, data: &FieldData) -> String;

    fn editable_properties(&self) -> &[Property];

    fn value_kind(&self) -> ValueKind;

    fn constraint(&self) -> InputConstraint {
        InputConstraint::None
    }
}
