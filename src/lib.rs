// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod builder;       // design-time builder
pub mod capture;       // camera capture for scanner fields
pub mod config;        // options + field type registry
pub mod errors;        // error handling
pub mod fields;        // standard field types
pub mod model;         // serialized form model
pub mod observability;
pub mod renderer;      // run-time form + submission
pub mod traits;        // field type, media and confirm seams
