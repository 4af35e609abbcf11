// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The ordered sequence of fields that defines a form.
//!
//! Order is significant: it is both the design-surface order and the order of
//! the rendered form. Each builder and renderer owns its own `FormModel`;
//! nothing is shared between instances.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::FormModelError;
use crate::model::FieldData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormModel {
    fields: Vec<FieldData>,
}

impl FormModel {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Wraps a field sequence after checking that ids are unique.
    pub fn from_fields(fields: Vec<FieldData>) -> Result<Self, FormModelError> {
        let model = Self { fields };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), FormModelError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(FormModelError::DuplicateFieldId {
                    field_id: field.id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldData] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldData> {
        self.fields.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldData> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn position(&self, field_id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == field_id)
    }

    pub fn push(&mut self, field: FieldData) {
        self.fields.push(field);
    }

    /// Swaps in a new version of an existing field, matched by id.
    ///
    /// Returns `false` (and drops `field`) if the id is no longer present.
    pub fn replace(&mut self, field: FieldData) -> bool {
        match self.position(&field.id) {
            Some(index) => {
                self.fields[index] = field;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, field_id: &str) -> Option<FieldData> {
        let index = self.position(field_id)?;
        Some(self.fields.remove(index))
    }

    /// Moves `dragged_id` to the index `target_id` occupied before the move.
    ///
    /// The dragged field is removed first and then inserted at the target's
    /// original index, so `[A, B, C]` with `reorder(A, C)` becomes `[B, C, A]`
    /// while `reorder(C, A)` becomes `[C, A, B]`.
    ///
    /// Returns `false` when either id is missing or both are the same.
    pub fn reorder(&mut self, dragged_id: &str, target_id: &str) -> bool {
        if dragged_id == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged_id), self.position(target_id)) else {
            return false;
        };
        let dragged = self.fields.remove(from);
        self.fields.insert(to, dragged);
        true
    }

    pub fn move_to_end(&mut self, field_id: &str) -> bool {
        let Some(index) = self.position(field_id) else {
            return false;
        };
        let field = self.fields.remove(index);
        self.fields.push(field);
        true
    }

    /// Removes every field, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.fields.len();
        self.fields.clear();
        removed
    }

    /// Highest `field-N` suffix present, 0 when there is none.
    pub fn max_id_suffix(&self) -> u64 {
        self.fields
            .iter()
            .filter_map(FieldData::id_suffix)
            .max()
            .unwrap_or(0)
    }

    pub fn into_fields(self) -> Vec<FieldData> {
        self.fields
    }
}

impl<'a> IntoIterator for &'a FormModel {
    type Item = &'a FieldData;
    type IntoIter = std::slice::Iter<'a, FieldData>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
