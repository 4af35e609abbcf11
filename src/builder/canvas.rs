//! Design surface: one cached item per placed field, in model order.

use crate::builder::drag::DragState;
use crate::config::consts::EMPTY_CANVAS_TEXT;
use crate::config::FieldTypeRegistry;
use crate::fields::markup::escape;
use crate::model::{FieldData, FormModel, Layout};

/// Rendered state of one placed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasItem {
    pub field_id: String,
    /// Header caption, the field's label
    pub title: String,
    pub preview: String,
}

impl CanvasItem {
    fn from_field(field: &FieldData, registry: &FieldTypeRegistry) -> Self {
        Self {
            field_id: field.id.clone(),
            title: field.label.clone(),
            preview: registry.render_preview(field),
        }
    }

    fn render(&self, drag: &DragState) -> String {
        let mut class = String::from("df-field-wrapper");
        if drag.dragging_field() == Some(self.field_id.as_str()) {
            class.push_str(" dragging");
        }
        if drag.is_field_highlighted(&self.field_id) {
            class.push_str(" drag-over");
        }
        let id = escape(&self.field_id);
        format!(
            concat!(
                "<div class=\"{class}\" data-field-id=\"{id}\" draggable=\"true\">",
                "<div class=\"df-field-header\"><span>{title}</span>",
                "<div class=\"df-field-actions\">",
                "<button class=\"df-btn-icon\" data-df-action=\"edit-field\" data-field-id=\"{id}\">✏️</button>",
                "<button class=\"df-btn-icon\" data-df-action=\"delete-field\" data-field-id=\"{id}\">🗑️</button>",
                "</div></div>",
                "<div class=\"df-field-preview\">{preview}</div>",
                "</div>"
            ),
            class = class,
            id = id,
            title = escape(&self.title),
            preview = self.preview
        )
    }
}

#[derive(Debug, Default)]
pub struct Canvas {
    items: Vec<CanvasItem>,
}

impl Canvas {
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the empty-state placeholder is showing
    pub fn shows_placeholder(&self) -> bool {
        self.items.is_empty()
    }

    pub fn append(&mut self, field: &FieldData, registry: &FieldTypeRegistry) {
        self.items.push(CanvasItem::from_field(field, registry));
    }

    /// Re-renders the item for `field` in place. Returns `false` if absent.
    pub fn refresh(&mut self, field: &FieldData, registry: &FieldTypeRegistry) -> bool {
        match self.items.iter_mut().find(|item| item.field_id == field.id) {
            Some(item) => {
                *item = CanvasItem::from_field(field, registry);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, field_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.field_id != field_id);
        self.items.len() != before
    }

    /// Puts existing items into model order, rendering any that are missing.
    pub fn sync_order(&mut self, model: &FormModel, registry: &FieldTypeRegistry) {
        let mut cached = std::mem::take(&mut self.items);
        self.items = model
            .iter()
            .map(|field| match cached.iter().position(|item| item.field_id == field.id) {
                Some(index) => cached.swap_remove(index),
                None => CanvasItem::from_field(field, registry),
            })
            .collect();
    }

    /// Discards every item and renders the model from scratch.
    pub fn rebuild(&mut self, model: &FormModel, registry: &FieldTypeRegistry) {
        self.items = model
            .iter()
            .map(|field| CanvasItem::from_field(field, registry))
            .collect();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn render(&self, layout: Layout, drag: &DragState) -> String {
        let class = if drag.is_canvas_highlighted() {
            "df-canvas df-drag-over"
        } else {
            "df-canvas"
        };

        let content = if self.items.is_empty() {
            let style = match layout {
                Layout::Grid => " style=\"grid-column:1 / -1\"",
                Layout::SingleColumn => "",
            };
            format!(
                "<div class=\"df-canvas-placeholder\"{}>{}</div>",
                style, EMPTY_CANVAS_TEXT
            )
        } else {
            self.items.iter().map(|item| item.render(drag)).collect()
        };

        format!(
            "<div class=\"{}\" style=\"min-height:400px;width:100%;{}\">{}</div>",
            class,
            layout.container_style(),
            content
        )
    }
}
