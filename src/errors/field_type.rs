// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for field type lookup in the registry.

use std::error::Error;
use std::fmt;

/// A field type id did not resolve to a registered descriptor.
///
/// This never crosses a render boundary: the builder and renderer log it and
/// substitute placeholder markup or skip the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldType {
    pub type_id: String,
}

impl UnknownFieldType {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
        }
    }
}

impl fmt::Display for UnknownFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field type \"{}\" not found in registry", self.type_id)
    }
}

impl Error for UnknownFieldType {}
