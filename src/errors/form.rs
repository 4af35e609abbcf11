// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for interacting with a rendered form and submitting it.

use std::fmt;
use thiserror::Error;

use crate::errors::{CaptureError, FormModelError};
use crate::model::Property;

/// Why a single control failed its native constraint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// `required` field left empty
    Missing,
    /// value of an email control is not an address
    InvalidEmail,
    /// value of a number control does not parse
    InvalidNumber,
    /// value of a date control is not `YYYY-MM-DD`
    InvalidDate,
}

/// A control that blocked submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field_id: String,
    pub name: String,
    pub kind: ViolationKind,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ViolationKind::Missing => "is required",
            ViolationKind::InvalidEmail => "must be an email address",
            ViolationKind::InvalidNumber => "must be a number",
            ViolationKind::InvalidDate => "must be a date (YYYY-MM-DD)",
        };
        write!(f, "'{}' {}", self.name, what)
    }
}

fn join_violations(violations: &[ConstraintViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from builder edits and renderer interaction.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Field '{0}' not found")]
    UnknownField(String),

    #[error("Option '{option}' is not offered by field '{field_id}'")]
    InvalidOption { field_id: String, option: String },

    #[error("Field '{0}' does not accept this kind of input")]
    NotInteractive(String),

    #[error("Property '{property:?}' is not editable on field '{field_id}'")]
    PropertyNotEditable { field_id: String, property: Property },

    #[error("Submission blocked: {}", join_violations(.0))]
    ConstraintViolation(Vec<ConstraintViolation>),

    #[error(transparent)]
    Model(#[from] FormModelError),

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

pub type FormResult<T> = Result<T, FormError>;
