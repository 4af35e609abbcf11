// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod capture;
mod config;
mod field_type;
mod form;
mod model;

pub use capture::{CaptureError, CaptureResult};
pub use config::ConfigError;
pub use field_type::UnknownFieldType;
pub use form::{ConstraintViolation, FormError, FormResult, ViolationKind};
pub use model::FormModelError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_are_stable() {
        let cases: Vec<(Box<dyn std::error::Error>, &str)> = vec![
            (
                Box::new(UnknownFieldType::new("rating")),
                "Field type \"rating\" not found in registry",
            ),
            (
                Box::new(FormModelError::NotAnArray { found: "object" }),
                "expected an array of fields, found object",
            ),
            (
                Box::new(FormModelError::DuplicateFieldId {
                    field_id: "field-2".to_string(),
                }),
                "duplicate field id 'field-2'",
            ),
            (
                Box::new(CaptureError::PermissionDenied {
                    field_id: "field-9".to_string(),
                    reason: "NotAllowedError".to_string(),
                }),
                "Camera access denied for field 'field-9': NotAllowedError",
            ),
            (
                Box::new(CaptureError::NotStreaming("field-9".to_string())),
                "not streaming",
            ),
        ];

        for (err, expected) in cases {
            assert!(
                err.to_string().contains(expected),
                "'{}' should contain '{}'",
                err,
                expected
            );
        }
    }

    #[test]
    fn test_constraint_violation_lists_every_field() {
        let err = FormError::ConstraintViolation(vec![
            ConstraintViolation {
                field_id: "field-1".to_string(),
                name: "fullName".to_string(),
                kind: ViolationKind::Missing,
            },
            ConstraintViolation {
                field_id: "field-2".to_string(),
                name: "email".to_string(),
                kind: ViolationKind::InvalidEmail,
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("Submission blocked:"));
        assert!(msg.contains("'fullName' is required"));
        assert!(msg.contains("'email' must be an email address"));
    }

    #[test]
    fn test_model_error_converts_into_form_error() {
        let err: FormError = FormModelError::malformed("eof").into();
        assert!(matches!(err, FormError::Model(FormModelError::Malformed { .. })));
    }
}
