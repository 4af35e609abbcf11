// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Option-based fields: select dropdown, checkbox group and radio group.
//!
//! Every option string is both the visible label and the submitted value.

use crate::config::consts::SELECT_PROMPT;
use crate::fields::markup::{bound_label, description, escape, plain_label, required_attr};
use crate::model::{FieldCategory, FieldData, Property};
use crate::traits::{FieldType, ValueKind};

/// Options every new choice field starts with
pub const DEFAULT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

const CHOICE_PROPERTIES: &[Property] = &[
    Property::Label,
    Property::Name,
    Property::Description,
    Property::Required,
    Property::Options,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Select,
    Checkbox,
    Radio,
}

pub struct ChoiceField {
    kind: ChoiceKind,
}

impl ChoiceField {
    pub fn new(kind: ChoiceKind) -> Self {
        Self { kind }
    }

    pub fn select() -> Self {
        Self::new(ChoiceKind::Select)
    }

    pub fn checkbox() -> Self {
        Self::new(ChoiceKind::Checkbox)
    }

    pub fn radio() -> Self {
        Self::new(ChoiceKind::Radio)
    }

    pub fn kind(&self) -> ChoiceKind {
        self.kind
    }

    fn input_type(&self) -> &'static str {
        match self.kind {
            ChoiceKind::Checkbox => "checkbox",
            _ => "radio",
        }
    }

    fn option_group(&self, items: Vec<String>) -> String {
        format!("<div class=\"df-option-group\">{}</div>", items.concat())
    }

    fn preview_item(&self, data: &FieldData, idx: usize, option: &str) -> String {
        let id = format!("{}_preview_{}", escape(&data.id), idx);
        let group = match self.kind {
            ChoiceKind::Radio => format!(" name=\"{}_preview\"", escape(&data.id)),
            _ => String::new(),
        };
        format!(
            "\n<div class=\"df-option-item\"><input type=\"{}\"{} id=\"{}\" disabled><label for=\"{}\">{}</label></div>",
            self.input_type(),
            group,
            id,
            id,
            escape(option)
        )
    }

    fn control_item(&self, data: &FieldData, idx: usize, option: &str) -> String {
        let id = format!("{}_{}", escape(&data.id), idx);
        // checkbox groups never carry `required`; one box is not the group
        let required = match self.kind {
            ChoiceKind::Radio => required_attr(data),
            _ => "",
        };
        format!(
            "\n<div class=\"df-option-item\"><input type=\"{}\" id=\"{}\" name=\"{}\" value=\"{}\"{}><label for=\"{}\">{}</label></div>",
            self.input_type(),
            id,
            escape(&data.name),
            escape(option),
            required,
            id,
            escape(option)
        )
    }
}

impl FieldType for ChoiceField {
    fn type_id(&self) -> &str {
        match self.kind {
            ChoiceKind::Select => "select",
            ChoiceKind::Checkbox => "checkbox",
            ChoiceKind::Radio => "radio",
        }
    }

    fn display_label(&self) -> &str {
        match self.kind {
            ChoiceKind::Select => "Select Dropdown",
            ChoiceKind::Checkbox => "Checkbox",
            ChoiceKind::Radio => "Radio Group",
        }
    }

    fn icon(&self) -> &str {
        match self.kind {
            ChoiceKind::Select => "📋",
            ChoiceKind::Checkbox => "☑️",
            ChoiceKind::Radio => "🔘",
        }
    }

    fn category(&self) -> FieldCategory {
        FieldCategory::Choice
    }

    fn default_data(&self, field_id: &str) -> FieldData {
        let label = match self.kind {
            ChoiceKind::Select => "Select Option",
            ChoiceKind::Checkbox => "Checkbox Options",
            ChoiceKind::Radio => "Radio Options",
        };
        FieldData::new(field_id, self.type_id(), label).with_options(DEFAULT_OPTIONS)
    }

    fn render_preview(&self, data: &FieldData) -> String {
        match self.kind {
            ChoiceKind::Select => {
                let options: String = data
                    .options()
                    .iter()
                    .map(|opt| format!("<option>{}</option>", escape(opt)))
                    .collect();
                format!(
                    "{}\n<select disabled><option>{}</option>{}</select>{}",
                    plain_label(data),
                    SELECT_PROMPT,
                    options,
                    description(data)
                )
            }
            ChoiceKind::Checkbox | ChoiceKind::Radio => {
                let items = data
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(idx, opt)| self.preview_item(data, idx, opt))
                    .collect();
                format!(
                    "{}\n{}{}",
                    plain_label(data),
                    self.option_group(items),
                    description(data)
                )
            }
        }
    }

    fn render_control(&self, data: &FieldData) -> String {
        match self.kind {
            ChoiceKind::Select => {
                let options: String = data
                    .options()
                    .iter()
                    .map(|opt| {
                        let opt = escape(opt);
                        format!("<option value=\"{}\">{}</option>", opt, opt)
                    })
                    .collect();
                format!(
                    "{}\n<select id=\"{}\" name=\"{}\"{}><option value=\"\">{}</option>{}</select>{}",
                    bound_label(data),
                    escape(&data.id),
                    escape(&data.name),
                    required_attr(data),
                    SELECT_PROMPT,
                    options,
                    description(data)
                )
            }
            ChoiceKind::Checkbox | ChoiceKind::Radio => {
                let items = data
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(idx, opt)| self.control_item(data, idx, opt))
                    .collect();
                format!(
                    "{}\n{}{}",
                    plain_label(data),
                    self.option_group(items),
                    description(data)
                )
            }
        }
    }

    fn editable_properties(&self) -> &[Property] {
        CHOICE_PROPERTIES
    }

    fn value_kind(&self) -> ValueKind {
        match self.kind {
            ChoiceKind::Select => ValueKind::SingleChoice,
            ChoiceKind::Checkbox => ValueKind::MultiChoice,
            ChoiceKind::Radio => ValueKind::OptionalChoice,
        }
    }
}
