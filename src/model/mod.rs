// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod document;
mod field_data;
mod form_model;
mod layout;

pub use document::{FormDocument, FormSource};
pub use field_data::{FieldCategory, FieldData, Property};
pub use form_model::FormModel;
pub use layout::Layout;
