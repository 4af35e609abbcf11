use indexmap::IndexMap;
use std::sync::Arc;

use crate::config::consts::{FIELD_TYPE_NOT_SUPPORTED, PREVIEW_NOT_AVAILABLE};
use crate::errors::UnknownFieldType;
use crate::fields::StandardFieldTypes;
use crate::model::FieldData;
use crate::observability::messages::registry::{FieldTypeNotFound, FieldTypeRegistered};
use crate::observability::messages::StructuredLog;
use crate::traits::FieldType;

/// Maps field type ids to their descriptors.
///
/// Insertion order is kept and becomes the palette order. One registry is
/// built at start-up and handed to builders and renderers behind an `Arc`.
#[derive(Default, Clone)]
pub struct FieldTypeRegistry {
    types: IndexMap<String, Arc<dyn FieldType>>,
}

impl FieldTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the twelve standard field types in palette order
    pub fn with_standard_types() -> Self {
        let mut registry = Self::new();
        for descriptor in StandardFieldTypes::all() {
            registry.register(descriptor);
        }
        registry
    }

    /// Adds a descriptor under its own type id.
    ///
    /// Registering an id again replaces the previous descriptor in place, so
    /// its palette position does not change. Returns the replaced descriptor.
    pub fn register(&mut self, descriptor: Arc<dyn FieldType>) -> Option<Arc<dyn FieldType>> {
        let type_id = descriptor.type_id().to_string();
        let previous = self.types.insert(type_id.clone(), descriptor);

        FieldTypeRegistered {
            type_id: &type_id,
            replaced: previous.is_some(),
        }
        .log();
        previous
    }

    pub fn resolve(&self, type_id: &str) -> Option<&Arc<dyn FieldType>> {
        self.types.get(type_id)
    }

    pub fn require(&self, type_id: &str) -> Result<&Arc<dyn FieldType>, UnknownFieldType> {
        self.resolve(type_id)
            .ok_or_else(|| UnknownFieldType::new(type_id))
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type ids in registration order
    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FieldType>> {
        self.types.values()
    }

    /// Runs the default data factory of `type_id` for a new field.
    pub fn create_field(&self, type_id: &str, field_id: &str) -> Result<FieldData, UnknownFieldType> {
        Ok(self.require(type_id)?.default_data(field_id))
    }

    /// Design-surface markup for `data`; never fails.
    pub fn render_preview(&self, data: &FieldData) -> String {
        match self.resolve(&data.field_type) {
            Some(descriptor) => descriptor.render_preview(data),
            None => {
                FieldTypeNotFound {
                    type_id: &data.field_type,
                    field_id: Some(&data.id),
                    context: "preview",
                }
                .log();
                PREVIEW_NOT_AVAILABLE.to_string()
            }
        }
    }

    /// Run-time control markup for `data`; never fails.
    pub fn render_control(&self, data: &FieldData) -> String {
        match self.resolve(&data.field_type) {
            Some(descriptor) => descriptor.render_control(data),
            None => {
                FieldTypeNotFound {
                    type_id: &data.field_type,
                    field_id: Some(&data.id),
                    context: "render",
                }
                .log();
                FIELD_TYPE_NOT_SUPPORTED.to_string()
            }
        }
    }
}

impl std::fmt::Debug for FieldTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTypeRegistry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}
