// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The field edit modal.
//!
//! An [`EditSession`] works on a copy of the field. Nothing reaches the form
//! model until the session is handed to
//! [`FormBuilder::save_edit`](super::FormBuilder::save_edit); cancelling or
//! dropping it discards every change.

use crate::errors::{FormError, FormResult};
use crate::fields::markup::escape;
use crate::model::{FieldData, Property};
use crate::observability::messages::builder::FieldEdited;
use crate::observability::messages::StructuredLog;

/// Kind of input the modal shows for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditControl {
    Checkbox,
    /// One option per line
    MultiLine,
    SingleLine,
}

impl EditControl {
    pub fn for_property(property: Property) -> Self {
        match property {
            Property::Required => EditControl::Checkbox,
            Property::Options => EditControl::MultiLine,
            _ => EditControl::SingleLine,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditSession {
    original: FieldData,
    working: FieldData,
    properties: Vec<Property>,
}

impl EditSession {
    pub(crate) fn new(field: &FieldData, properties: &[Property]) -> Self {
        Self {
            original: field.clone(),
            working: field.clone(),
            properties: properties.to_vec(),
        }
    }

    pub fn field_id(&self) -> &str {
        &self.working.id
    }

    /// The copy being edited
    pub fn working(&self) -> &FieldData {
        &self.working
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn controls(&self) -> Vec<(Property, EditControl)> {
        self.properties
            .iter()
            .map(|p| (*p, EditControl::for_property(*p)))
            .collect()
    }

    pub fn is_modified(&self) -> bool {
        self.working != self.original
    }

    fn ensure_editable(&self, property: Property) -> FormResult<()> {
        if self.properties.contains(&property) {
            Ok(())
        } else {
            Err(FormError::PropertyNotEditable {
                field_id: self.working.id.clone(),
                property,
            })
        }
    }

    /// Sets a single-line property (label, name, placeholder, description).
    pub fn set_text(&mut self, property: Property, value: &str) -> FormResult<()> {
        self.ensure_editable(property)?;
        if self.working.set_text(property, value) {
            Ok(())
        } else {
            Err(FormError::PropertyNotEditable {
                field_id: self.working.id.clone(),
                property,
            })
        }
    }

    pub fn set_required(&mut self, required: bool) -> FormResult<()> {
        self.ensure_editable(Property::Required)?;
        self.working.required = required;
        Ok(())
    }

    /// Replaces the options from multi-line text.
    ///
    /// One option per line, in order; lines holding only whitespace are
    /// dropped.
    pub fn set_options_text(&mut self, text: &str) -> FormResult<()> {
        self.ensure_editable(Property::Options)?;
        let options = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect::<Vec<_>>();
        self.working.options = Some(options);
        Ok(())
    }

    /// Current options joined one per line, as the modal shows them.
    pub fn options_text(&self) -> String {
        self.working.options().join("\n")
    }

    /// Discards the working copy.
    pub fn cancel(self) {
        FieldEdited {
            field_id: &self.working.id,
            saved: false,
        }
        .log();
    }

    pub(crate) fn into_working(self) -> FieldData {
        self.working
    }

    /// Modal markup with one control per editable property.
    pub fn render(&self) -> String {
        let mut body = String::new();
        for (property, control) in self.controls() {
            let group = match control {
                EditControl::Checkbox => format!(
                    "<label><input type=\"checkbox\" data-property=\"{}\"{}> {}</label>",
                    property.key(),
                    if self.working.required { " checked" } else { "" },
                    property.caption()
                ),
                EditControl::MultiLine => format!(
                    "<label>{}</label><textarea data-property=\"{}\">{}</textarea>",
                    property.caption(),
                    property.key(),
                    escape(&self.options_text())
                ),
                EditControl::SingleLine => format!(
                    "<label>{}</label><input type=\"text\" data-property=\"{}\" value=\"{}\">",
                    property.caption(),
                    property.key(),
                    escape(self.working.text(property).unwrap_or(""))
                ),
            };
            body.push_str(&format!("\n<div class=\"df-form-group\">{}</div>", group));
        }

        format!(
            concat!(
                "<div class=\"df-modal-overlay\" data-field-id=\"{id}\">",
                "<div class=\"df-modal\">",
                "<div class=\"df-modal-header\"><h3>Edit Field</h3>",
                "<button class=\"df-modal-close\" data-df-action=\"cancel-edit\">×</button></div>",
                "<div class=\"df-modal-body\">{body}\n</div>",
                "<div class=\"df-modal-footer\">",
                "<button class=\"df-btn\" data-df-action=\"cancel-edit\">Cancel</button>",
                "<button class=\"df-btn df-btn-primary\" data-df-action=\"save-edit\">Save</button>",
                "</div></div></div>"
            ),
            id = escape(&self.working.id),
            body = body
        )
    }
}
