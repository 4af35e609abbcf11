//! Display-only elements. They render the label as content and never submit.

use crate::fields::markup::escape;
use crate::model::{FieldCategory, FieldData, Property};
use crate::traits::{FieldType, ValueKind};

const LABEL_ONLY: &[Property] = &[Property::Label];

/// Heading tag for a header subtype; anything outside `h1`..`h6` renders as `h2`.
pub fn heading_tag(subtype: Option<&str>) -> &'static str {
    match subtype {
        Some("h1") => "h1",
        Some("h3") => "h3",
        Some("h4") => "h4",
        Some("h5") => "h5",
        Some("h6") => "h6",
        _ => "h2",
    }
}

pub struct HeaderField;

impl HeaderField {
    fn render(&self, data: &FieldData) -> String {
        let tag = heading_tag(data.subtype.as_deref());
        format!("<{}>{}</{}>", tag, escape(&data.label), tag)
    }
}

impl FieldType for HeaderField {
    fn type_id(&self) -> &str {
        "header"
    }

    fn display_label(&self) -> &str {
        "Header"
    }

    fn icon(&self) -> &str {
        "📌"
    }

    fn category(&self) -> FieldCategory {
        FieldCategory::Display
    }

    fn default_data(&self, field_id: &str) -> FieldData {
        FieldData::new(field_id, "header", "Header Text").with_subtype("h2")
    }

    fn render_preview(&self, data: &FieldData) -> String {
        self.render(data)
    }

    fn render_control(&self, data: &FieldData) -> String {
        self.render(data)
    }

    fn editable_properties(&self) -> &[Property] {
        LABEL_ONLY
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Static
    }
}

pub struct ParagraphField;

impl FieldType for ParagraphField {
    fn type_id(&self) -> &str {
        "paragraph"
    }

    fn display_label(&self) -> &str {
        "Paragraph"
    }

    fn icon(&self) -> &str {
        "¶"
    }

    fn category(&self) -> FieldCategory {
        FieldCategory::Display
    }

    fn default_data(&self, field_id: &str) -> FieldData {
        FieldData::new(field_id, "paragraph", "Paragraph text goes here")
    }

    fn render_preview(&self, data: &FieldData) -> String {
        format!("<p>{}</p>", escape(&data.label))
    }

    fn render_control(&self, data: &FieldData) -> String {
        self.render_preview(data)
    }

    fn editable_properties(&self) -> &[Property] {
        LABEL_ONLY
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Static
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_tag_falls_back_to_h2() {
        let cases = vec![
            (None, "h2"),
            (Some("h1"), "h1"),
            (Some("h6"), "h6"),
            (Some("h7"), "h2"),
            (Some("script"), "h2"),
            (Some(""), "h2"),
        ];
        for (subtype, expected) in cases {
            assert_eq!(heading_tag(subtype), expected, "subtype: {:?}", subtype);
        }
    }

    #[test]
    fn test_header_renders_same_markup_in_both_modes() {
        let mut data = HeaderField.default_data("field-1");
        assert_eq!(data.subtype.as_deref(), Some("h2"));
        data.subtype = Some("h3".to_string());
        data.label = "Contact <details>".to_string();

        let expected = "<h3>Contact &lt;details&gt;</h3>";
        assert_eq!(HeaderField.render_preview(&data), expected);
        assert_eq!(HeaderField.render_control(&data), expected);
    }

    #[test]
    fn test_paragraph_has_no_control() {
        let data = ParagraphField.default_data("field-2");
        assert_eq!(ParagraphField.render_control(&data), "<p>Paragraph text goes here</p>");
        assert_eq!(ParagraphField.value_kind(), ValueKind::Static);
        assert_eq!(ParagraphField.editable_properties(), &[Property::Label]);
    }
}
