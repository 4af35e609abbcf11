// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Live state of the controls on a rendered form.

use crate::config::FieldTypeRegistry;
use crate::errors::{FormError, FormResult};
use crate::fields::markup::escape;
use crate::fields::scanner::captured_preview;
use crate::model::FieldData;
use crate::renderer::submission::SubmittedValues;
use crate::traits::{InputConstraint, ValueKind};

/// Current value held by one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Display-only field or unsupported type
    None,
    /// Text-like input or the hidden scanner input
    Text(String),
    /// Select or radio group; `None` is the prompt / nothing chosen
    Selected(Option<String>),
    /// Checkbox group, one flag per option in option order
    Checked(Vec<bool>),
}

/// One field of the rendered form together with its current value.
#[derive(Debug, Clone)]
pub struct Control {
    field: FieldData,
    /// `None` when the field's type is not registered
    kind: Option<ValueKind>,
    constraint: InputConstraint,
    value: ControlValue,
}

impl Control {
    pub fn from_field(field: &FieldData, registry: &FieldTypeRegistry) -> Self {
        let (kind, constraint) = match registry.resolve(&field.field_type) {
            Some(descriptor) => (Some(descriptor.value_kind()), descriptor.constraint()),
            None => (None, InputConstraint::None),
        };
        let value = match kind {
            None | Some(ValueKind::Static) => ControlValue::None,
            Some(ValueKind::Text) | Some(ValueKind::Capture) => ControlValue::Text(String::new()),
            Some(ValueKind::SingleChoice) | Some(ValueKind::OptionalChoice) => {
                ControlValue::Selected(None)
            }
            Some(ValueKind::MultiChoice) => ControlValue::Checked(vec![false; field.options().len()]),
        };
        Self {
            field: field.clone(),
            kind,
            constraint,
            value,
        }
    }

    pub fn field(&self) -> &FieldData {
        &self.field
    }

    pub fn field_id(&self) -> &str {
        &self.field.id
    }

    pub fn value_kind(&self) -> Option<ValueKind> {
        self.kind
    }

    pub fn constraint(&self) -> InputConstraint {
        self.constraint
    }

    pub fn value(&self) -> &ControlValue {
        &self.value
    }

    pub fn is_supported(&self) -> bool {
        self.kind.is_some()
    }

    /// Single value as the control would submit it; empty when unset.
    pub fn text_value(&self) -> &str {
        match &self.value {
            ControlValue::Text(s) => s,
            ControlValue::Selected(Some(s)) => s,
            _ => "",
        }
    }

    /// Sets a text, select or radio control.
    ///
    /// Choice controls accept one of their options, or the empty string to
    /// go back to the prompt.
    pub fn set_value(&mut self, value: &str) -> FormResult<()> {
        match (self.kind, &mut self.value) {
            (Some(ValueKind::Text), ControlValue::Text(current)) => {
                *current = value.to_string();
                Ok(())
            }
            (Some(ValueKind::SingleChoice | ValueKind::OptionalChoice), ControlValue::Selected(current)) => {
                if value.is_empty() {
                    *current = None;
                    return Ok(());
                }
                if !self.field.options().iter().any(|opt| opt == value) {
                    return Err(FormError::InvalidOption {
                        field_id: self.field.id.clone(),
                        option: value.to_string(),
                    });
                }
                *current = Some(value.to_string());
                Ok(())
            }
            _ => Err(FormError::NotInteractive(self.field.id.clone())),
        }
    }

    /// Checks or unchecks one box of a checkbox group.
    pub fn set_checked(&mut self, option: &str, checked: bool) -> FormResult<()> {
        let ControlValue::Checked(flags) = &mut self.value else {
            return Err(FormError::NotInteractive(self.field.id.clone()));
        };
        let index = self
            .field
            .options()
            .iter()
            .position(|opt| opt == option)
            .ok_or_else(|| FormError::InvalidOption {
                field_id: self.field.id.clone(),
                option: option.to_string(),
            })?;
        flags[index] = checked;
        Ok(())
    }

    /// Options currently checked, in option order.
    pub fn checked_options(&self) -> Vec<&str> {
        match &self.value {
            ControlValue::Checked(flags) => self
                .field
                .options()
                .iter()
                .zip(flags)
                .filter(|(_, checked)| **checked)
                .map(|(opt, _)| opt.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Stores the data URL produced by the camera in a scanner control.
    pub(crate) fn set_capture(&mut self, data_url: &str) -> bool {
        match (self.kind, &mut self.value) {
            (Some(ValueKind::Capture), ControlValue::Text(current)) => {
                *current = data_url.to_string();
                true
            }
            _ => false,
        }
    }

    /// `markup` with the current value written in: a `value` attribute or
    /// textarea body, `selected` / `checked` on chosen options, and the
    /// captured image in a scanner's preview slot.
    ///
    /// Unset controls and display fields come back unchanged.
    pub fn fill_markup(&self, mut markup: String) -> String {
        let id = escape(&self.field.id);
        let name = escape(&self.field.name);
        let control_attrs = format!("id=\"{}\" name=\"{}\"", id, name);

        match (self.kind, &self.value) {
            (Some(ValueKind::Text), ControlValue::Text(value)) if !value.is_empty() => {
                if markup.contains(&format!("<textarea {}", control_attrs)) {
                    markup = markup.replacen(
                        "></textarea>",
                        &format!(">{}</textarea>", escape(value)),
                        1,
                    );
                } else {
                    insert_after(&mut markup, &control_attrs, &format!(" value=\"{}\"", escape(value)));
                }
            }
            (Some(ValueKind::Capture), ControlValue::Text(data_url)) if !data_url.is_empty() => {
                insert_after(&mut markup, &control_attrs, &format!(" value=\"{}\"", escape(data_url)));
                let slot = format!("<div id=\"{}_preview\" style=\"margin-top:10px\">", id);
                insert_after(&mut markup, &slot, &captured_preview(data_url));
            }
            (_, ControlValue::Selected(Some(option))) => {
                let option = escape(option);
                if markup.contains(&format!("<select {}", control_attrs)) {
                    let tag = format!("<option value=\"{}\"", option);
                    insert_after(&mut markup, &tag, " selected");
                } else {
                    let item = format!("name=\"{}\" value=\"{}\"", name, option);
                    insert_after(&mut markup, &item, " checked");
                }
            }
            (_, ControlValue::Checked(_)) => {
                for option in self.checked_options() {
                    let item = format!("name=\"{}\" value=\"{}\"", name, escape(option));
                    insert_after(&mut markup, &item, " checked");
                }
            }
            _ => {}
        }
        markup
    }

    /// Appends this control's entries the way a form submission would.
    ///
    /// Controls without a name contribute nothing.
    pub fn collect_into(&self, values: &mut SubmittedValues) {
        let name = self.field.name.as_str();
        if name.is_empty() {
            return;
        }
        match &self.value {
            ControlValue::None => {}
            ControlValue::Text(s) => values.append(name, s.as_str()),
            ControlValue::Selected(selected) => match (self.kind, selected) {
                (_, Some(s)) => values.append(name, s.as_str()),
                (Some(ValueKind::SingleChoice), None) => values.append(name, ""),
                _ => {}
            },
            ControlValue::Checked(_) => {
                for option in self.checked_options() {
                    values.append(name, option);
                }
            }
        }
    }
}

/// Inserts `insertion` right after the first `anchor` not already followed
/// by it. Returns whether the anchor was found.
fn insert_after(markup: &mut String, anchor: &str, insertion: &str) -> bool {
    let mut from = 0;
    while let Some(found) = markup[from..].find(anchor) {
        let end = from + found + anchor.len();
        if !markup[end..].starts_with(insertion) {
            markup.insert_str(end, insertion);
            return true;
        }
        from = end;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(field: FieldData) -> Control {
        Control::from_field(&field, &FieldTypeRegistry::with_standard_types())
    }

    fn collected(control: &Control) -> String {
        let mut values = SubmittedValues::new();
        control.collect_into(&mut values);
        values.to_json().unwrap()
    }

    #[test]
    fn test_untouched_controls_collect() {
        struct TestCase {
            name: &'static str,
            field: FieldData,
            expected_json: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "text submits empty string",
                field: FieldData::new("field-1", "text", "Name"),
                expected_json: r#"{"field-1":""}"#,
            },
            TestCase {
                name: "select submits the prompt value",
                field: FieldData::new("field-2", "select", "Role").with_options(["A", "B"]),
                expected_json: r#"{"field-2":""}"#,
            },
            TestCase {
                name: "radio submits nothing",
                field: FieldData::new("field-3", "radio", "Size").with_options(["S", "M"]),
                expected_json: "{}",
            },
            TestCase {
                name: "checkbox submits nothing",
                field: FieldData::new("field-4", "checkbox", "Colors").with_options(["red"]),
                expected_json: "{}",
            },
            TestCase {
                name: "scanner submits empty hidden value",
                field: FieldData::new("field-5", "scanner", "Badge"),
                expected_json: r#"{"field-5":""}"#,
            },
            TestCase {
                name: "header submits nothing",
                field: FieldData::new("field-6", "header", "Title"),
                expected_json: "{}",
            },
            TestCase {
                name: "unknown type submits nothing",
                field: FieldData::new("field-7", "rating", "Stars"),
                expected_json: "{}",
            },
        ];

        for tc in test_cases {
            assert_eq!(collected(&control(tc.field)), tc.expected_json, "Test case '{}' failed", tc.name);
        }
    }

    #[test]
    fn test_checkbox_entries_follow_option_order() {
        let mut c = control(FieldData::new("field-1", "checkbox", "Colors").with_options(["red", "green", "blue"]));
        c.set_checked("blue", true).unwrap();
        c.set_checked("red", true).unwrap();
        assert_eq!(c.checked_options(), vec!["red", "blue"]);
        assert_eq!(collected(&c), r#"{"field-1":["red","blue"]}"#);

        c.set_checked("red", false).unwrap();
        assert_eq!(collected(&c), r#"{"field-1":"blue"}"#);
    }

    #[test]
    fn test_set_value_rules() {
        let mut select = control(FieldData::new("field-1", "select", "Role").with_options(["Admin"]));
        select.set_value("Admin").unwrap();
        assert_eq!(select.text_value(), "Admin");
        assert!(matches!(select.set_value("Root"), Err(FormError::InvalidOption { .. })));
        select.set_value("").unwrap();
        assert_eq!(select.value(), &ControlValue::Selected(None));

        let mut checkbox = control(FieldData::new("field-2", "checkbox", "C").with_options(["x"]));
        assert!(matches!(checkbox.set_value("x"), Err(FormError::NotInteractive(_))));
        assert!(matches!(checkbox.set_checked("y", true), Err(FormError::InvalidOption { .. })));

        let mut scanner = control(FieldData::new("field-3", "scanner", "Badge"));
        assert!(matches!(scanner.set_value("data:"), Err(FormError::NotInteractive(_))));
        assert!(scanner.set_capture("data:image/png;base64,AA=="));
        assert_eq!(scanner.text_value(), "data:image/png;base64,AA==");
    }

    #[test]
    fn test_fill_markup_shows_current_value() {
        struct TestCase {
            name: &'static str,
            field: FieldData,
            input: fn(&mut Control),
            expected: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "text input gets a value attribute",
                field: FieldData::new("field-1", "text", "Name"),
                input: |c| c.set_value("Ada \"A\"").unwrap(),
                expected: vec!["id=\"field-1\" name=\"field-1\" value=\"Ada &quot;A&quot;\""],
            },
            TestCase {
                name: "textarea gets a body",
                field: FieldData::new("field-2", "textarea", "Notes"),
                input: |c| c.set_value("a < b").unwrap(),
                expected: vec![">a &lt; b</textarea>"],
            },
            TestCase {
                name: "select marks the chosen option",
                field: FieldData::new("field-3", "select", "Role").with_options(["Admin", "Viewer"]),
                input: |c| c.set_value("Viewer").unwrap(),
                expected: vec!["<option value=\"Viewer\" selected>", "<option value=\"Admin\">"],
            },
            TestCase {
                name: "radio checks the chosen item",
                field: FieldData::new("field-4", "radio", "Size").with_options(["S", "M"]),
                input: |c| c.set_value("M").unwrap(),
                expected: vec!["value=\"M\" checked", "value=\"S\">"],
            },
            TestCase {
                name: "checkbox checks every ticked box",
                field: FieldData::new("field-5", "checkbox", "Colors").with_options(["red", "green", "blue"]),
                input: |c| {
                    c.set_checked("red", true).unwrap();
                    c.set_checked("blue", true).unwrap();
                },
                expected: vec!["value=\"red\" checked", "value=\"green\">", "value=\"blue\" checked"],
            },
            TestCase {
                name: "scanner fills the hidden input and preview slot",
                field: FieldData::new("field-6", "scanner", "Badge"),
                input: |c| {
                    c.set_capture("data:image/png;base64,AA==");
                },
                expected: vec![
                    "name=\"field-6\" value=\"data:image/png;base64,AA==\"",
                    "style=\"margin-top:10px\"><img src=\"data:image/png;base64,AA==\"",
                    "Image captured",
                ],
            },
        ];

        let registry = FieldTypeRegistry::with_standard_types();
        for tc in test_cases {
            let mut c = Control::from_field(&tc.field, &registry);
            let untouched = registry.render_control(&tc.field);
            assert_eq!(c.fill_markup(untouched.clone()), untouched, "Test case '{}' failed", tc.name);

            (tc.input)(&mut c);
            let html = c.fill_markup(untouched);
            for fragment in tc.expected {
                assert!(html.contains(fragment), "Test case '{}' failed: {} not in {}", tc.name, fragment, html);
            }
        }
    }

    #[test]
    fn test_unnamed_control_is_skipped() {
        let mut field = FieldData::new("field-1", "text", "Name");
        field.name.clear();
        let mut c = control(field);
        c.set_value("Ada").unwrap();
        assert_eq!(collected(&c), "{}");
    }
}
