//! Small helpers shared by the standard field renderers.

use crate::config::consts::REQUIRED_MARKER;
use crate::model::FieldData;

/// Escapes text for use inside element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped label text with the required marker appended.
pub fn label_text(data: &FieldData) -> String {
    let mut text = escape(&data.label);
    if data.required {
        text.push_str(REQUIRED_MARKER);
    }
    text
}

/// `<label>` without a `for` target, used by previews and option groups.
pub fn plain_label(data: &FieldData) -> String {
    format!("<label>{}</label>", label_text(data))
}

/// `<label for="...">` bound to the control with the field's id.
pub fn bound_label(data: &FieldData) -> String {
    format!(
        "<label for=\"{}\">{}</label>",
        escape(&data.id),
        label_text(data)
    )
}

/// Help text below a control; empty when the field has no description.
pub fn description(data: &FieldData) -> String {
    if data.description.is_empty() {
        String::new()
    } else {
        format!(
            "\n<small class=\"df-field-description\">{}</small>",
            escape(&data.description)
        )
    }
}

pub fn required_attr(data: &FieldData) -> &'static str {
    if data.required {
        " required"
    } else {
        ""
    }
}
