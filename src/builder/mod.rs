// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Design-time form builder.
//!
//! A [`FormBuilder`] owns a [`FormModel`] and a [`Canvas`] that mirrors it.
//! Every operation changes the model first and then brings the canvas in
//! line, so `render()` always reflects the model. Hosts drive it from their
//! own UI events and splice the produced markup into their page.

pub mod canvas;
pub mod drag;
pub mod editor;

#[cfg(test)]
mod integration_tests;

pub use canvas::{Canvas, CanvasItem};
pub use drag::{DragPayload, DragState, DropTarget};
pub use editor::{EditControl, EditSession};

use std::sync::Arc;

use crate::config::consts::{CONFIRM_CLEAR_ALL, CONFIRM_DELETE_FIELD, FIELD_ID_PREFIX};
use crate::config::{BuilderOptions, ControlPosition, FieldTypeRegistry};
use crate::errors::{FormError, FormModelError, FormResult};
use crate::fields::markup::escape;
use crate::model::{FieldData, FormDocument, FormModel, FormSource, Layout};
use crate::observability::messages::builder::{
    ConfirmationDeclined, DisabledFieldUnknown, FieldAdded, FieldDeleted, FieldEdited,
    FieldIdsExhausted, FieldMoved, FormCleared, FormImportStarted, FormImported,
};
use crate::observability::messages::registry::FieldTypeNotFound;
use crate::observability::messages::StructuredLog;
use crate::traits::{AcceptAll, Confirm, FieldType};

pub struct FormBuilder {
    registry: Arc<FieldTypeRegistry>,
    options: BuilderOptions,
    model: FormModel,
    canvas: Canvas,
    drag: DragState,
    layout: Layout,
    field_counter: u64,
    confirm: Box<dyn Confirm>,
}

impl FormBuilder {
    pub fn new(registry: Arc<FieldTypeRegistry>, options: BuilderOptions) -> Self {
        for type_id in &options.disabled_fields {
            if !registry.contains(type_id) {
                DisabledFieldUnknown { type_id }.log();
            }
        }

        Self {
            registry,
            options,
            model: FormModel::new(),
            canvas: Canvas::default(),
            drag: DragState::default(),
            layout: Layout::default(),
            field_counter: 0,
            confirm: Box::new(AcceptAll),
        }
    }

    /// Replaces the gate in front of delete and clear.
    pub fn with_confirm(mut self, confirm: impl Confirm + 'static) -> Self {
        self.confirm = Box::new(confirm);
        self
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Palette entries: registered types in registration order minus disabled ones
    pub fn palette(&self) -> Vec<&dyn FieldType> {
        self.registry
            .iter()
            .filter(|d| !self.options.disabled_fields.iter().any(|id| id == d.type_id()))
            .map(|d| d.as_ref())
            .collect()
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldData> {
        self.model.get(field_id)
    }

    pub fn fields(&self) -> &[FieldData] {
        self.model.fields()
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Id the next `add_field` will assign, `None` once ids are exhausted
    pub fn next_field_id(&self) -> Option<String> {
        self.field_counter
            .checked_add(1)
            .map(|n| format!("{}{}", FIELD_ID_PREFIX, n))
    }

    /// Appends a new field of `type_id` with the type's default data.
    ///
    /// Returns the new id, or `None` when the type is not registered or no
    /// further `field-N` id exists; in that case nothing changes.
    pub fn add_field(&mut self, type_id: &str) -> Option<String> {
        let descriptor = match self.registry.resolve(type_id) {
            Some(descriptor) => descriptor,
            None => {
                FieldTypeNotFound {
                    type_id,
                    field_id: None,
                    context: "add_field",
                }
                .log();
                return None;
            }
        };

        let Some(counter) = self.field_counter.checked_add(1) else {
            FieldIdsExhausted {
                type_id,
                id_counter: self.field_counter,
            }
            .log();
            return None;
        };
        self.field_counter = counter;
        let field_id = format!("{}{}", FIELD_ID_PREFIX, counter);
        let field = descriptor.default_data(&field_id);

        self.canvas.append(&field, &self.registry);
        self.model.push(field);

        FieldAdded {
            field_id: &field_id,
            type_id,
            field_count: self.model.len(),
        }
        .log();
        Some(field_id)
    }

    /// Opens the edit modal for a field on a working copy.
    ///
    /// `None` when the id is unknown or its type is not registered (there is
    /// no property list to edit).
    pub fn edit_field(&self, field_id: &str) -> Option<EditSession> {
        let field = self.model.get(field_id)?;
        match self.registry.resolve(&field.field_type) {
            Some(descriptor) => Some(EditSession::new(field, descriptor.editable_properties())),
            None => {
                FieldTypeNotFound {
                    type_id: &field.field_type,
                    field_id: Some(field_id),
                    context: "edit",
                }
                .log();
                None
            }
        }
    }

    /// Commits a session: the working copy replaces the field and its canvas
    /// item is re-rendered.
    pub fn save_edit(&mut self, session: EditSession) -> FormResult<()> {
        let field = session.into_working();
        let field_id = field.id.clone();

        if !self.model.replace(field) {
            return Err(FormError::UnknownField(field_id));
        }
        if let Some(saved) = self.model.get(&field_id) {
            self.canvas.refresh(saved, &self.registry);
        }

        FieldEdited {
            field_id: &field_id,
            saved: true,
        }
        .log();
        Ok(())
    }

    /// Removes a field after confirmation. Returns whether it was removed.
    pub fn delete_field(&mut self, field_id: &str) -> bool {
        if self.model.get(field_id).is_none() {
            return false;
        }
        if !self.confirm.confirm(CONFIRM_DELETE_FIELD) {
            ConfirmationDeclined {
                action: "delete_field",
            }
            .log();
            return false;
        }

        self.model.remove(field_id);
        self.canvas.remove(field_id);

        FieldDeleted {
            field_id,
            remaining: self.model.len(),
        }
        .log();
        true
    }

    /// Moves `dragged_id` to the position `target_id` held before the move.
    pub fn reorder_fields(&mut self, dragged_id: &str, target_id: &str) -> bool {
        let from = self.model.position(dragged_id);
        if !self.model.reorder(dragged_id, target_id) {
            return false;
        }
        self.after_move(dragged_id, from);
        true
    }

    pub fn move_field_to_end(&mut self, field_id: &str) -> bool {
        let from = self.model.position(field_id);
        if !self.model.move_to_end(field_id) {
            return false;
        }
        self.after_move(field_id, from);
        true
    }

    fn after_move(&mut self, field_id: &str, from: Option<usize>) {
        self.canvas.sync_order(&self.model, &self.registry);
        if let (Some(from), Some(to)) = (from, self.model.position(field_id)) {
            FieldMoved { field_id, from, to }.log();
        }
    }

    /// Copy of the form model
    pub fn export(&self) -> Vec<FieldData> {
        self.model.fields().to_vec()
    }

    /// Form model as a pretty-printed JSON array
    pub fn export_json(&self) -> Result<String, FormModelError> {
        Ok(serde_json::to_string_pretty(&self.model)?)
    }

    /// Form model inside a versioned envelope
    pub fn export_document(&self) -> FormDocument {
        FormDocument::from_model(&self.model)
    }

    /// Replaces the model with `source` and re-renders the canvas.
    ///
    /// The id counter moves up to the highest imported `field-N` suffix so
    /// later additions cannot collide; it never moves down. On error nothing
    /// changes.
    pub fn import(&mut self, source: impl Into<FormSource>) -> Result<(), FormModelError> {
        let start_msg = FormImportStarted {
            current_fields: self.model.len(),
        };
        let span = start_msg.span("builder_import");
        let _guard = span.enter();
        start_msg.log();

        let model = source.into().into_model()?;

        self.field_counter = self.field_counter.max(model.max_id_suffix());
        self.model = model;
        self.canvas.rebuild(&self.model, &self.registry);

        FormImported {
            field_count: self.model.len(),
            id_counter: self.field_counter,
        }
        .log();
        Ok(())
    }

    /// Empties the form after confirmation. Returns whether it was cleared.
    pub fn clear_all(&mut self) -> bool {
        if !self.confirm.confirm(CONFIRM_CLEAR_ALL) {
            ConfirmationDeclined { action: "clear_all" }.log();
            return false;
        }
        let removed = self.model.clear();
        self.canvas.clear();
        FormCleared { removed }.log();
        true
    }

    pub fn toggle_layout(&mut self) -> Layout {
        self.layout = self.layout.toggled();
        self.layout
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn begin_drag(&mut self, payload: DragPayload) {
        self.drag.begin(payload);
    }

    pub fn drag_over(&mut self, target: DropTarget) {
        self.drag.over(target);
    }

    pub fn drag_leave(&mut self, target: &DropTarget) {
        self.drag.leave(target);
    }

    /// Abandons the drag without dropping.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Drops the tracked payload on `target`. Returns whether the model changed.
    pub fn drop_on(&mut self, target: DropTarget) -> bool {
        match self.drag.end() {
            Some(payload) => self.handle_drop(payload, target),
            None => false,
        }
    }

    /// Applies a drop:
    /// - a palette payload adds a field wherever it lands
    /// - a field dropped on another field is reordered there
    /// - a field dropped on the bare canvas moves to the end
    pub fn handle_drop(&mut self, payload: DragPayload, target: DropTarget) -> bool {
        match (payload, target) {
            (DragPayload::Palette(type_id), _) => self.add_field(&type_id).is_some(),
            (DragPayload::Field(dragged), DropTarget::Field(target_id)) => {
                self.reorder_fields(&dragged, &target_id)
            }
            (DragPayload::Field(dragged), DropTarget::Canvas) => self.move_field_to_end(&dragged),
        }
    }

    fn layout_label(&self) -> &'static str {
        match self.layout {
            Layout::SingleColumn => "⚙️ Layout: Single Column",
            Layout::Grid => "⚙️ Layout: 2x2 Grid",
        }
    }

    fn render_palette(&self) -> String {
        let buttons: String = self
            .palette()
            .into_iter()
            .map(|d| {
                format!(
                    "<div class=\"df-field-button\" draggable=\"true\" data-field-type=\"{}\"><span class=\"df-icon\">{}</span><span>{}</span></div>",
                    escape(d.type_id()),
                    d.icon(),
                    escape(d.display_label())
                )
            })
            .collect();
        format!(
            "<div class=\"df-controls-panel\"><h3>Form Fields</h3>{}</div>",
            buttons
        )
    }

    /// Whole builder: palette, layout toggle, canvas and the action bar.
    pub fn render(&self) -> String {
        let palette = self.render_palette();
        let canvas = format!(
            "<div style=\"position:relative;flex:1;width:100%\"><button class=\"df-btn\" data-df-action=\"toggle-layout\">{}</button>{}</div>",
            self.layout_label(),
            self.canvas.render(self.layout, &self.drag)
        );

        let panels = match self.options.control_position {
            ControlPosition::Left => format!("{}{}", palette, canvas),
            ControlPosition::Right => format!("{}{}", canvas, palette),
        };

        let actions = if self.options.show_action_buttons {
            "<div class=\"df-actions\"><button class=\"df-btn\" data-df-action=\"clear-all\">Clear All</button></div>"
        } else {
            ""
        };

        format!(
            "<div class=\"df-builder-container\"><div class=\"df-builder-layout\">{}</div>{}</div>",
            panels, actions
        )
    }
}

impl std::fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("fields", &self.model.ids())
            .field("layout", &self.layout)
            .field("field_counter", &self.field_counter)
            .finish()
    }
}
