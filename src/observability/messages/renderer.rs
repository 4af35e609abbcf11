// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for run-time form rendering and submission.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A form model was loaded into a renderer.
///
/// # Log Level
/// `info!` - Important operational event; unsupported fields are also counted
pub struct FormLoaded {
    pub field_count: usize,
    pub unsupported_count: usize,
}

impl Display for FormLoaded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.unsupported_count > 0 {
            write!(
                f,
                "Form loaded with {} fields ({} of unsupported type)",
                self.field_count, self.unsupported_count
            )
        } else {
            write!(f, "Form loaded with {} fields", self.field_count)
        }
    }
}

impl StructuredLog for FormLoaded {
    fn log(&self) {
        tracing::info!(
            field_count = self.field_count,
            unsupported_count = self.unsupported_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "form_loaded",
            span_name = name,
            field_count = self.field_count,
            unsupported_count = self.unsupported_count,
        )
    }
}

/// A submission began; constraints are about to be checked.
///
/// # Log Level
/// `debug!` - Detailed flow information
pub struct SubmissionStarted {
    pub control_count: usize,
}

impl Display for SubmissionStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Submitting form with {} controls", self.control_count)
    }
}

impl StructuredLog for SubmissionStarted {
    fn log(&self) {
        tracing::debug!(control_count = self.control_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "submission_started",
            span_name = name,
            control_count = self.control_count,
        )
    }
}

/// Values were collected and handed to the submit callback.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FormSubmitted {
    pub key_count: usize,
    pub callback_invoked: bool,
}

impl Display for FormSubmitted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Form submitted with {} keys", self.key_count)
    }
}

impl StructuredLog for FormSubmitted {
    fn log(&self) {
        tracing::info!(
            key_count = self.key_count,
            callback_invoked = self.callback_invoked,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "form_submitted",
            span_name = name,
            key_count = self.key_count,
        )
    }
}

/// Native constraints stopped a submission.
///
/// # Log Level
/// `warn!` - User input needs attention
pub struct SubmissionBlocked<'a> {
    pub violation_count: usize,
    pub first_field: &'a str,
}

impl Display for SubmissionBlocked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Submission blocked by {} constraint violations, first at '{}'",
            self.violation_count, self.first_field
        )
    }
}

impl StructuredLog for SubmissionBlocked<'_> {
    fn log(&self) {
        tracing::warn!(
            violation_count = self.violation_count,
            first_field = self.first_field,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "submission_blocked",
            span_name = name,
            violation_count = self.violation_count,
        )
    }
}
