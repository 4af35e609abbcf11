// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::fields::markup::{bound_label, description, escape, plain_label, required_attr};
use crate::model::{FieldCategory, FieldData, Property};
use crate::traits::{FieldType, InputConstraint, ValueKind};

const WITH_PLACEHOLDER: &[Property] = &[
    Property::Label,
    Property::Name,
    Property::Placeholder,
    Property::Description,
    Property::Required,
];

const WITHOUT_PLACEHOLDER: &[Property] = &[
    Property::Label,
    Property::Name,
    Property::Description,
    Property::Required,
];

/// Static description of one single-line `<input>` flavour
#[derive(Debug, Clone)]
pub struct InputFieldConfig {
    pub type_id: &'static str,
    pub display_label: &'static str,
    pub icon: &'static str,
    pub default_label: &'static str,
    /// `None` for inputs that show no placeholder (date, file)
    pub default_placeholder: Option<&'static str>,
    pub constraint: InputConstraint,
}

/// Single-line input field: text, email, number, date and file upload
pub struct InputField {
    config: InputFieldConfig,
}

impl InputField {
    pub fn new(config: InputFieldConfig) -> Self {
        Self { config }
    }

    pub fn text() -> Self {
        Self::new(InputFieldConfig {
            type_id: "text",
            display_label: "Text Input",
            icon: "📝",
            default_label: "Text Field",
            default_placeholder: Some("Enter text"),
            constraint: InputConstraint::None,
        })
    }

    pub fn email() -> Self {
        Self::new(InputFieldConfig {
            type_id: "email",
            display_label: "Email",
            icon: "📧",
            default_label: "Email Address",
            default_placeholder: Some("you@example.com"),
            constraint: InputConstraint::Email,
        })
    }

    pub fn number() -> Self {
        Self::new(InputFieldConfig {
            type_id: "number",
            display_label: "Number",
            icon: "🔢",
            default_label: "Number Field",
            default_placeholder: Some("0"),
            constraint: InputConstraint::Number,
        })
    }

    pub fn date() -> Self {
        Self::new(InputFieldConfig {
            type_id: "date",
            display_label: "Date",
            icon: "📅",
            default_label: "Date",
            default_placeholder: None,
            constraint: InputConstraint::Date,
        })
    }

    pub fn file() -> Self {
        Self::new(InputFieldConfig {
            type_id: "file",
            display_label: "File Upload",
            icon: "📎",
            default_label: "Upload File",
            default_placeholder: None,
            constraint: InputConstraint::None,
        })
    }

    fn shows_placeholder(&self) -> bool {
        self.config.default_placeholder.is_some()
    }

    fn placeholder_attr(&self, data: &FieldData) -> String {
        if self.shows_placeholder() {
            format!(" placeholder=\"{}\"", escape(&data.placeholder))
        } else {
            String::new()
        }
    }
}

impl FieldType for InputField {
    fn type_id(&self) -> &str {
        self.config.type_id
    }

    fn display_label(&self) -> &str {
        self.config.display_label
    }

    fn icon(&self) -> &str {
        self.config.icon
    }

    fn category(&self) -> FieldCategory {
        FieldCategory::Input
    }

    fn default_data(&self, field_id: &str) -> FieldData {
        FieldData::new(field_id, self.config.type_id, self.config.default_label)
            .with_placeholder(self.config.default_placeholder.unwrap_or(""))
    }

    fn render_preview(&self, data: &FieldData) -> String {
        format!(
            "{}\n<input type=\"{}\"{} disabled>{}",
            plain_label(data),
            self.config.type_id,
            self.placeholder_attr(data),
            description(data)
        )
    }

    fn render_control(&self, data: &FieldData) -> String {
        format!(
            "{}\n<input type=\"{}\" id=\"{}\" name=\"{}\"{}{}>{}",
            bound_label(data),
            self.config.type_id,
            escape(&data.id),
            escape(&data.name),
            self.placeholder_attr(data),
            required_attr(data),
            description(data)
        )
    }

    fn editable_properties(&self) -> &[Property] {
        if self.shows_placeholder() {
            WITH_PLACEHOLDER
        } else {
            WITHOUT_PLACEHOLDER
        }
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn constraint(&self) -> InputConstraint {
        self.config.constraint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_per_flavour() {
        struct TestCase {
            field: InputField,
            label: &'static str,
            placeholder: &'static str,
            constraint: InputConstraint,
        }

        let test_cases = vec![
            TestCase {
                field: InputField::text(),
                label: "Text Field",
                placeholder: "Enter text",
                constraint: InputConstraint::None,
            },
            TestCase {
                field: InputField::email(),
                label: "Email Address",
                placeholder: "you@example.com",
                constraint: InputConstraint::Email,
            },
            TestCase {
                field: InputField::number(),
                label: "Number Field",
                placeholder: "0",
                constraint: InputConstraint::Number,
            },
            TestCase {
                field: InputField::date(),
                label: "Date",
                placeholder: "",
                constraint: InputConstraint::Date,
            },
            TestCase {
                field: InputField::file(),
                label: "Upload File",
                placeholder: "",
                constraint: InputConstraint::None,
            },
        ];

        for tc in test_cases {
            let data = tc.field.default_data("field-4");
            assert_eq!(data.id, "field-4");
            assert_eq!(data.name, "field-4");
            assert_eq!(data.field_type, tc.field.type_id());
            assert_eq!(data.label, tc.label);
            assert_eq!(data.placeholder, tc.placeholder);
            assert!(!data.required);
            assert!(data.options.is_none());
            assert_eq!(tc.field.constraint(), tc.constraint);
            assert_eq!(tc.field.value_kind(), ValueKind::Text);
        }
    }

    #[test]
    fn test_preview_is_disabled_and_unnamed() {
        let field = InputField::email();
        let data = field.default_data("field-1");
        let html = field.render_preview(&data);

        assert!(html.contains("<input type=\"email\" placeholder=\"you@example.com\" disabled>"));
        assert!(!html.contains("name="));
    }

    #[test]
    fn test_control_carries_name_and_required() {
        let field = InputField::text();
        let mut data = field.default_data("field-1");
        data.name = "fullName".to_string();
        data.required = true;
        let html = field.render_control(&data);

        assert!(html.contains("<label for=\"field-1\">Text Field *</label>"));
        assert!(html.contains("id=\"field-1\" name=\"fullName\" placeholder=\"Enter text\" required>"));
    }

    #[test]
    fn test_date_and_file_skip_placeholder() {
        for field in [InputField::date(), InputField::file()] {
            let data = field.default_data("field-2");
            assert!(!field.render_control(&data).contains("placeholder"));
            assert!(!field.editable_properties().contains(&Property::Placeholder));
        }
        assert!(InputField::text()
            .editable_properties()
            .contains(&Property::Placeholder));
    }
}
