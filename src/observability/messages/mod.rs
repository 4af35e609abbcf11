// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Every diagnostic the crate emits is a small struct with a `Display`
//! implementation and a [`StructuredLog`] implementation that picks the level
//! and the structured fields. Call sites build the struct and call `.log()`.
//!
//! # Organization
//!
//! * `registry` - field type registration and lookup failures
//! * `builder` - design-surface edits (add, edit, delete, reorder, import)
//! * `renderer` - form rendering and submission
//! * `capture` - camera stream lifecycle on scanner fields
//!
//! # Usage Pattern
//!
//! ```rust
//! use dynamic_forms::observability::messages::builder::FieldAdded;
//! use dynamic_forms::observability::messages::StructuredLog;
//!
//! let msg = FieldAdded {
//!     field_id: "field-1",
//!     type_id: "text",
//!     field_count: 1,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod builder;
pub mod capture;
pub mod registry;
pub mod renderer;

/// A message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the same fields as the event.
    fn span(&self, name: &str) -> Span;
}
