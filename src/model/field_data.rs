// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One placed field on a form.
///
/// This is the record exchanged between design time and run time. The common
/// attributes are typed; anything else a producer wrote (type-specific extras
/// this build does not know about) is kept in `extra` so that an import/export
/// cycle does not lose it.
///
/// # Example
/// ```json
/// {
///   "id": "field-2",
///   "type": "select",
///   "label": "Role",
///   "name": "role",
///   "required": true,
///   "placeholder": "",
///   "description": "",
///   "options": ["Admin", "Editor", "Viewer"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldData {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Heading level for header fields (`h1`..`h6`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldData {
    /// A record with the common attributes every standard type starts from.
    pub fn new(id: &str, field_type: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            field_type: field_type.to_string(),
            label: label.to_string(),
            name: id.to_string(),
            required: false,
            placeholder: String::new(),
            description: String::new(),
            options: None,
            subtype: None,
            extra: Map::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_subtype(mut self, subtype: &str) -> Self {
        self.subtype = Some(subtype.to_string());
        self
    }

    /// Options as a slice; empty for non-choice fields.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Value of a textual property, `None` for `required` and `options`.
    pub fn text(&self, property: Property) -> Option<&str> {
        match property {
            Property::Label => Some(&self.label),
            Property::Name => Some(&self.name),
            Property::Placeholder => Some(&self.placeholder),
            Property::Description => Some(&self.description),
            Property::Required | Property::Options => None,
        }
    }

    /// Assigns a textual property. Returns `false` for non-textual ones.
    pub fn set_text(&mut self, property: Property, value: &str) -> bool {
        let slot = match property {
            Property::Label => &mut self.label,
            Property::Name => &mut self.name,
            Property::Placeholder => &mut self.placeholder,
            Property::Description => &mut self.description,
            Property::Required | Property::Options => return false,
        };
        *slot = value.to_string();
        true
    }

    /// Numeric suffix of a generated id (`field-7` -> 7).
    pub fn id_suffix(&self) -> Option<u64> {
        self.id
            .strip_prefix(crate::config::consts::FIELD_ID_PREFIX)
            .and_then(|n| n.parse().ok())
    }
}

/// A property a user may change in the edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Label,
    Name,
    Placeholder,
    Description,
    Required,
    Options,
}

impl Property {
    /// Key used in the serialized record.
    pub fn key(&self) -> &'static str {
        match self {
            Property::Label => "label",
            Property::Name => "name",
            Property::Placeholder => "placeholder",
            Property::Description => "description",
            Property::Required => "required",
            Property::Options => "options",
        }
    }

    /// Caption shown next to the property's control in the edit modal.
    pub fn caption(&self) -> &'static str {
        match self {
            Property::Label => "Label",
            Property::Name => "Name",
            Property::Placeholder => "Placeholder",
            Property::Description => "Description",
            Property::Required => "Required",
            Property::Options => "Options (one per line)",
        }
    }
}

/// Palette grouping of a field type; presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    Input,
    Choice,
    Display,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape_uses_type_key_and_skips_absent_options() {
        let field = FieldData::new("field-1", "text", "Full name").with_placeholder("Enter text");
        let value = serde_json::to_value(&field).unwrap();

        assert_eq!(value["type"], "text");
        assert_eq!(value["name"], "field-1");
        assert_eq!(value["placeholder"], "Enter text");
        assert!(value.get("options").is_none());
        assert!(value.get("subtype").is_none());
        assert!(value.get("field_type").is_none());
    }

    #[test]
    fn test_unknown_keys_survive_a_round_trip() {
        let json = r#"{"id":"field-3","type":"rating","label":"Stars","max":5,"icons":["a","b"]}"#;
        let field: FieldData = serde_json::from_str(json).unwrap();

        assert_eq!(field.extra.get("max"), Some(&serde_json::json!(5)));
        assert_eq!(field.name, "");
        assert!(!field.required);

        let back = serde_json::to_value(&field).unwrap();
        assert_eq!(back["max"], 5);
        assert_eq!(back["icons"][1], "b");
    }

    #[test]
    fn test_text_properties() {
        let mut field = FieldData::new("field-1", "text", "A");
        assert!(field.set_text(Property::Description, "help"));
        assert!(!field.set_text(Property::Required, "true"));
        assert_eq!(field.text(Property::Description), Some("help"));
        assert_eq!(field.text(Property::Options), None);
    }

    #[test]
    fn test_id_suffix() {
        let cases = vec![("field-7", Some(7)), ("field-x", None), ("custom", None), ("field-", None)];
        for (id, expected) in cases {
            let field = FieldData::new(id, "text", "");
            assert_eq!(field.id_suffix(), expected, "id: {}", id);
        }
    }
}
