// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Run-time form renderer.
//!
//! A [`FormRenderer`] takes a serialized form model, keeps one [`Control`] per
//! field and produces the interactive form markup. Hosts feed user input in
//! through `set_value` / `set_checked` and the camera operations, then call
//! `submit()` to check native constraints and collect the values. `render()`
//! reflects those inputs, so re-rendering never loses what the user entered.

pub mod constraints;
pub mod controls;
pub mod submission;


pub use controls::{Control, ControlValue};
pub use submission::{SubmittedValue, SubmittedValues};

use std::sync::Arc;

use crate::capture::{CameraScanner, CaptureState};
use crate::config::{FieldTypeRegistry, RendererOptions};
use crate::errors::{CaptureError, FormError, FormModelError, FormResult};
use crate::fields::markup::escape;
use crate::fields::scanner::captured_preview;
use crate::model::{FormModel, FormSource, Layout};
use crate::observability::messages::renderer::{
    FormLoaded, FormSubmitted, SubmissionBlocked, SubmissionStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{MediaDevices, ValueKind};

type SubmitCallback = Box<dyn FnMut(&SubmittedValues)>;

pub struct FormRenderer {
    registry: Arc<FieldTypeRegistry>,
    options: RendererOptions,
    model: FormModel,
    controls: Vec<Control>,
    layout: Layout,
    on_submit: Option<SubmitCallback>,
    scanner: Option<CameraScanner>,
}

impl FormRenderer {
    /// Parses `source` and prepares a control for every field.
    pub fn new(
        registry: Arc<FieldTypeRegistry>,
        source: impl Into<FormSource>,
        options: RendererOptions,
    ) -> Result<Self, FormModelError> {
        let mut renderer = Self {
            registry,
            options,
            model: FormModel::new(),
            controls: Vec::new(),
            layout: Layout::default(),
            on_submit: None,
            scanner: None,
        };
        renderer.set_data(source)?;
        Ok(renderer)
    }

    pub fn on_submit(mut self, callback: impl FnMut(&SubmittedValues) + 'static) -> Self {
        self.set_on_submit(callback);
        self
    }

    pub fn set_on_submit(&mut self, callback: impl FnMut(&SubmittedValues) + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    /// Attaches the camera backend used by scanner fields.
    pub fn with_media_devices(mut self, devices: Arc<dyn MediaDevices>) -> Self {
        self.scanner = Some(CameraScanner::new(devices));
        self
    }

    /// Replaces the form. Every control starts over and open cameras are released.
    ///
    /// On error the current form is left as it was.
    pub fn set_data(&mut self, source: impl Into<FormSource>) -> Result<(), FormModelError> {
        let model = source.into().into_model()?;
        self.controls = model
            .iter()
            .map(|field| Control::from_field(field, &self.registry))
            .collect();
        self.model = model;
        if let Some(scanner) = self.scanner.as_mut() {
            scanner.reset();
        }

        FormLoaded {
            field_count: self.model.len(),
            unsupported_count: self.unsupported_fields().len(),
        }
        .log();
        Ok(())
    }

    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn field_count(&self) -> usize {
        self.model.len()
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Ids of fields whose type is not registered
    pub fn unsupported_fields(&self) -> Vec<&str> {
        self.controls
            .iter()
            .filter(|c| !c.is_supported())
            .map(Control::field_id)
            .collect()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn toggle_layout(&mut self) -> Layout {
        self.layout = self.layout.toggled();
        self.layout
    }

    fn control(&self, field_id: &str) -> FormResult<&Control> {
        self.controls
            .iter()
            .find(|c| c.field_id() == field_id)
            .ok_or_else(|| FormError::UnknownField(field_id.to_string()))
    }

    fn control_mut(&mut self, field_id: &str) -> FormResult<&mut Control> {
        self.controls
            .iter_mut()
            .find(|c| c.field_id() == field_id)
            .ok_or_else(|| FormError::UnknownField(field_id.to_string()))
    }

    /// Types into a text control or picks an option of a select / radio group.
    pub fn set_value(&mut self, field_id: &str, value: &str) -> FormResult<()> {
        self.control_mut(field_id)?.set_value(value)
    }

    pub fn set_checked(&mut self, field_id: &str, option: &str, checked: bool) -> FormResult<()> {
        self.control_mut(field_id)?.set_checked(option, checked)
    }

    pub fn value(&self, field_id: &str) -> FormResult<&ControlValue> {
        Ok(self.control(field_id)?.value())
    }

    /// Current values in field order, without checking constraints.
    pub fn values(&self) -> SubmittedValues {
        let mut values = SubmittedValues::new();
        for control in &self.controls {
            control.collect_into(&mut values);
        }
        values
    }

    /// Runs the native constraint checks without submitting.
    pub fn validate(&self) -> FormResult<()> {
        let violations = constraints::validate_controls(&self.controls);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(FormError::ConstraintViolation(violations))
        }
    }

    /// Checks constraints, collects the values and hands them to the callback.
    ///
    /// When a constraint fails nothing is collected and the callback is not
    /// invoked.
    pub fn submit(&mut self) -> FormResult<SubmittedValues> {
        let start_msg = SubmissionStarted {
            control_count: self.controls.len(),
        };
        let span = start_msg.span("renderer_submit");
        let _guard = span.enter();
        start_msg.log();

        if let Err(err) = self.validate() {
            if let FormError::ConstraintViolation(violations) = &err {
                SubmissionBlocked {
                    violation_count: violations.len(),
                    first_field: violations.first().map(|v| v.field_id.as_str()).unwrap_or(""),
                }
                .log();
            }
            return Err(err);
        }

        let values = self.values();
        let callback_invoked = match self.on_submit.as_mut() {
            Some(callback) => {
                callback(&values);
                true
            }
            None => false,
        };
        FormSubmitted {
            key_count: values.len(),
            callback_invoked,
        }
        .log();
        Ok(values)
    }

    fn scanner_for(&mut self, field_id: &str) -> FormResult<&mut CameraScanner> {
        let is_scanner = self
            .controls
            .iter()
            .any(|c| c.field_id() == field_id && c.value_kind() == Some(ValueKind::Capture));
        if !is_scanner {
            return Err(CaptureError::UnknownField(field_id.to_string()).into());
        }
        self.scanner
            .as_mut()
            .ok_or_else(|| CaptureError::MediaUnavailable.into())
    }

    pub async fn open_camera(&mut self, field_id: &str) -> FormResult<()> {
        self.scanner_for(field_id)?.open_camera(field_id).await?;
        Ok(())
    }

    /// Takes a still for a streaming scanner field and stores it as the
    /// field's value. Returns the data URL.
    pub fn capture_image(&mut self, field_id: &str) -> FormResult<String> {
        let data_url = self.scanner_for(field_id)?.capture_image(field_id)?.data_url.clone();
        self.control_mut(field_id)?.set_capture(&data_url);
        Ok(data_url)
    }

    pub fn close_camera(&mut self, field_id: &str) -> FormResult<bool> {
        Ok(self.scanner_for(field_id)?.close_camera(field_id))
    }

    pub fn camera_status(&self, field_id: &str) -> CaptureState {
        self.scanner
            .as_ref()
            .map(|s| s.status(field_id))
            .unwrap_or(CaptureState::Idle)
    }

    pub fn active_streams(&self) -> usize {
        self.scanner.as_ref().map(CameraScanner::active_streams).unwrap_or(0)
    }

    /// Markup for the preview slot of a scanner field that holds a capture.
    pub fn capture_preview(&self, field_id: &str) -> Option<String> {
        self.scanner
            .as_ref()
            .and_then(|s| s.captured(field_id))
            .map(|image| captured_preview(&image.data_url))
    }

    fn layout_label(&self) -> &'static str {
        match self.layout {
            Layout::SingleColumn => "⚙️ Layout: Horizontal",
            Layout::Grid => "⚙️ Layout: 2x2 Grid",
        }
    }

    fn field_wrapper_style(&self) -> &'static str {
        match self.layout {
            Layout::SingleColumn => {
                "display:grid;grid-template-columns:200px 1fr;gap:15px;align-items:start"
            }
            Layout::Grid => "display:block",
        }
    }

    /// Form markup with every control showing its current value.
    pub fn render(&self) -> String {
        let wrapper_style = self.field_wrapper_style();
        let fields: String = self
            .controls
            .iter()
            .map(|control| {
                format!(
                    "<div class=\"df-rendered-field\" data-field-id=\"{}\" style=\"{}\">{}</div>",
                    escape(control.field_id()),
                    wrapper_style,
                    control.fill_markup(self.registry.render_control(control.field()))
                )
            })
            .collect();

        let submit = if self.options.show_submit {
            format!(
                "<div style=\"grid-column:1 / -1;margin-top:10px\"><button type=\"submit\" class=\"df-btn df-btn-primary\">{}</button></div>",
                escape(&self.options.submit_text)
            )
        } else {
            String::new()
        };

        format!(
            concat!(
                "<div class=\"df-renderer\" style=\"position:relative\">",
                "<button type=\"button\" class=\"df-btn\" data-df-action=\"toggle-layout\" style=\"position:absolute;top:0;right:0\">{}</button>",
                "<form class=\"df-rendered-form\" style=\"{};margin-top:40px\">{}{}</form>",
                "</div>"
            ),
            self.layout_label(),
            self.layout.container_style(),
            fields,
            submit
        )
    }
}

impl std::fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("fields", &self.model.ids())
            .field("layout", &self.layout)
            .field("has_callback", &self.on_submit.is_some())
            .field("scanner", &self.scanner)
            .finish()
    }
}
