use std::sync::Arc;

use crate::errors::UnknownFieldType;
use crate::traits::FieldType;
use super::*;

/// Factory for the field types that ship with the crate
pub struct StandardFieldTypes;

impl StandardFieldTypes {
    /// Create a standard field type descriptor by id
    ///
    /// - "text", "email", "number", "date", "file" -> InputField
    /// - "textarea" -> TextAreaField
    /// - "select", "checkbox", "radio" -> ChoiceField
    /// - "header", "paragraph" -> HeaderField / ParagraphField
    /// - "scanner" -> ScannerField
    pub fn create(type_id: &str) -> Result<Arc<dyn FieldType>, UnknownFieldType> {
        match type_id {
            // Single-line inputs
            "text" => Ok(Arc::new(InputField::text())),
            "email" => Ok(Arc::new(InputField::email())),
            "number" => Ok(Arc::new(InputField::number())),
            "date" => Ok(Arc::new(InputField::date())),
            "file" => Ok(Arc::new(InputField::file())),

            "textarea" => Ok(Arc::new(TextAreaField)),

            // Option-based
            "select" => Ok(Arc::new(ChoiceField::select())),
            "checkbox" => Ok(Arc::new(ChoiceField::checkbox())),
            "radio" => Ok(Arc::new(ChoiceField::radio())),

            // Display-only
            "header" => Ok(Arc::new(HeaderField)),
            "paragraph" => Ok(Arc::new(ParagraphField)),

            "scanner" => Ok(Arc::new(ScannerField)),

            _ => Err(UnknownFieldType::new(type_id)),
        }
    }

    /// All standard type ids in palette order
    pub fn list_available() -> Vec<&'static str> {
        vec![
            "text",
            "email",
            "number",
            "textarea",
            "select",
            "checkbox",
            "radio",
            "date",
            "file",
            "header",
            "paragraph",
            "scanner",
        ]
    }

    pub fn is_available(type_id: &str) -> bool {
        Self::list_available().contains(&type_id)
    }

    /// One descriptor per standard type, in palette order
    pub fn all() -> Vec<Arc<dyn FieldType>> {
        Self::list_available()
            .into_iter()
            .filter_map(|id| Self::create(id).ok())
            .collect()
    }
}
