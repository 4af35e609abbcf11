//! Drag-and-drop bookkeeping for the design surface.
//!
//! Only the payload and the highlighted target are tracked here. What a drop
//! means is decided by [`FormBuilder::drop_on`](super::FormBuilder::drop_on).

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A palette button, carrying a field type id
    Palette(String),
    /// A placed field, carrying its id
    Field(String),
}

/// Where the pointer is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The canvas itself, outside any field wrapper
    Canvas,
    /// A placed field's wrapper
    Field(String),
}

#[derive(Debug, Default)]
pub struct DragState {
    payload: Option<DragPayload>,
    highlight: Option<DropTarget>,
}

impl DragState {
    pub fn begin(&mut self, payload: DragPayload) {
        self.payload = Some(payload);
        self.highlight = None;
    }

    /// Updates the highlight for a pointer over `target`.
    ///
    /// A field wrapper lights up only while another placed field is dragged
    /// over it; every other hover highlights the canvas.
    pub fn over(&mut self, target: DropTarget) {
        self.highlight = match (&self.payload, target) {
            (None, _) => None,
            (Some(DragPayload::Field(dragged)), DropTarget::Field(id)) if *dragged != id => {
                Some(DropTarget::Field(id))
            }
            (Some(_), _) => Some(DropTarget::Canvas),
        };
    }

    pub fn leave(&mut self, target: &DropTarget) {
        if self.highlight.as_ref() == Some(target) {
            self.highlight = None;
        }
    }

    /// Ends the drag, returning its payload.
    pub fn end(&mut self) -> Option<DragPayload> {
        self.highlight = None;
        self.payload.take()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    pub fn highlight(&self) -> Option<&DropTarget> {
        self.highlight.as_ref()
    }

    /// Id of the placed field being dragged, if any
    pub fn dragging_field(&self) -> Option<&str> {
        match &self.payload {
            Some(DragPayload::Field(id)) => Some(id),
            _ => None,
        }
    }

    pub fn is_field_highlighted(&self, field_id: &str) -> bool {
        matches!(&self.highlight, Some(DropTarget::Field(id)) if id == field_id)
    }

    pub fn is_canvas_highlighted(&self) -> bool {
        matches!(self.highlight, Some(DropTarget::Canvas))
    }
}
