// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Camera capture field.
//!
//! The control is a hidden input holding the captured image as a PNG data URL
//! plus the buttons a host wires to [`CameraScanner`](crate::capture::CameraScanner)
//! through `data-df-action` attributes.

use crate::fields::markup::{bound_label, description, escape, plain_label, required_attr};
use crate::model::{FieldCategory, FieldData, Property};
use crate::traits::{FieldType, ValueKind};

pub struct ScannerField;

/// Thumbnail markup shown under a scanner field after a capture.
pub fn captured_preview(data_url: &str) -> String {
    format!(
        "<img src=\"{}\" style=\"max-width:200px;border:1px solid #ccc;border-radius:4px\"><br><small>Image captured</small>",
        escape(data_url)
    )
}

impl FieldType for ScannerField {
    fn type_id(&self) -> &str {
        "scanner"
    }

    fn display_label(&self) -> &str {
        "Scanner"
    }

    fn icon(&self) -> &str {
        "📷"
    }

    fn category(&self) -> FieldCategory {
        FieldCategory::Input
    }

    fn default_data(&self, field_id: &str) -> FieldData {
        FieldData::new(field_id, "scanner", "Scan/Capture Image")
    }

    fn render_preview(&self, data: &FieldData) -> String {
        format!(
            "{}\n<button type=\"button\" class=\"df-scanner-btn\" disabled>📷 Open Camera</button>{}",
            plain_label(data),
            description(data)
        )
    }

    fn render_control(&self, data: &FieldData) -> String {
        let id = escape(&data.id);
        format!(
            concat!(
                "{label}\n",
                "<input type=\"hidden\" id=\"{id}\" name=\"{name}\"{required}>\n",
                "<button type=\"button\" class=\"df-scanner-btn\" data-df-action=\"open-camera\" data-field-id=\"{id}\">📷 Open Camera</button>\n",
                "<div id=\"{id}_camera\" style=\"display:none;margin-top:10px\">",
                "<video id=\"{id}_video\" autoplay style=\"width:100%;max-width:400px;border:1px solid #ccc\"></video>",
                "<div style=\"margin-top:10px\">",
                "<button type=\"button\" data-df-action=\"capture-image\" data-field-id=\"{id}\">📸 Capture</button>",
                "<button type=\"button\" data-df-action=\"close-camera\" data-field-id=\"{id}\">Close</button>",
                "</div></div>\n",
                "<div id=\"{id}_preview\" style=\"margin-top:10px\"></div>{description}"
            ),
            label = bound_label(data),
            id = id,
            name = escape(&data.name),
            required = required_attr(data),
            description = description(data)
        )
    }

    fn editable_properties(&self) -> &[Property] {
        &[
            Property::Label,
            Property::Name,
            Property::Description,
            Property::Required,
        ]
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Capture
    }
}
