use crate::fields::markup::{bound_label, description, escape, plain_label, required_attr};
use crate::model::{FieldCategory, FieldData, Property};
use crate::traits::{FieldType, ValueKind};

/// Multi-line free text field
pub struct TextAreaField;

impl FieldType for TextAreaField {
    fn type_id(&self) -> &str {
        "textarea"
    }

    fn display_label(&self) -> &str {
        "Text Area"
    }

    fn icon(&self) -> &str {
        "📄"
    }

    fn category(&self) -> FieldCategory {
        FieldCategory::Input
    }

    fn default_data(&self, field_id: &str) -> FieldData {
        FieldData::new(field_id, "textarea", "Message").with_placeholder("Enter your message")
    }

    fn render_preview(&self, data: &FieldData) -> String {
        format!(
            "{}\n<textarea placeholder=\"{}\" disabled></textarea>{}",
            plain_label(data),
            escape(&data.placeholder),
            description(data)
        )
    }

    fn render_control(&self, data: &FieldData) -> String {
        format!(
            "{}\n<textarea id=\"{}\" name=\"{}\" placeholder=\"{}\"{}></textarea>{}",
            bound_label(data),
            escape(&data.id),
            escape(&data.name),
            escape(&data.placeholder),
            required_attr(data),
            description(data)
        )
    }

    fn editable_properties(&self) -> &[Property] {
        &[
            Property::Label,
            Property::Name,
            Property::Placeholder,
            Property::Description,
            Property::Required,
        ]
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textarea_markup() {
        let data = TextAreaField.default_data("field-3");
        assert_eq!(data.label, "Message");
        assert_eq!(data.placeholder, "Enter your message");

        let preview = TextAreaField.render_preview(&data);
        assert!(preview.contains("<textarea placeholder=\"Enter your message\" disabled></textarea>"));

        let control = TextAreaField.render_control(&data);
        assert!(control.contains("<textarea id=\"field-3\" name=\"field-3\""));
        assert!(!control.contains("required"));
    }
}
