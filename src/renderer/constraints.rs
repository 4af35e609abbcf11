//! Native control constraints checked before a submission goes out.
//!
//! These mirror what a browser enforces on its own: `required` on text-like,
//! select, radio and hidden inputs, and the syntax of `email`, `number` and
//! `date` inputs. Checkbox groups are never required as a group.

use chrono::{Datelike, NaiveDate};

use crate::errors::{ConstraintViolation, ViolationKind};
use crate::renderer::controls::Control;
use crate::traits::{InputConstraint, ValueKind};

/// Every control that would block submission, in field order.
pub fn validate_controls(controls: &[Control]) -> Vec<ConstraintViolation> {
    controls
        .iter()
        .filter_map(|control| {
            check_control(control).map(|kind| ConstraintViolation {
                field_id: control.field().id.clone(),
                name: control.field().name.clone(),
                kind,
            })
        })
        .collect()
}

/// The first constraint `control` fails, if any.
///
/// Checkbox groups are never required. A scanner's `required` sits on a
/// hidden input, which a browser would skip; it is enforced here so a
/// required capture cannot be submitted empty.
pub fn check_control(control: &Control) -> Option<ViolationKind> {
    let kind = control.value_kind()?;
    if matches!(kind, ValueKind::Static | ValueKind::MultiChoice) {
        return None;
    }
    let value = control.text_value();

    if value.is_empty() {
        return if control.field().required {
            Some(ViolationKind::Missing)
        } else {
            None
        };
    }

    match control.constraint() {
        InputConstraint::None => None,
        InputConstraint::Email if !is_valid_email(value) => Some(ViolationKind::InvalidEmail),
        InputConstraint::Number if !is_valid_number(value) => Some(ViolationKind::InvalidNumber),
        InputConstraint::Date if !is_valid_date(value) => Some(ViolationKind::InvalidDate),
        _ => None,
    }
}

/// `local@domain`, no whitespace, domain made of non-empty dot-separated
/// labels of letters, digits and hyphens.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if local.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// A floating-point literal as a number input accepts it: optional leading
/// minus, digits with an optional fraction, optional exponent.
pub fn is_valid_number(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };

    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => digits(int) && digits(frac),
        None => digits(mantissa),
    };
    let exponent_ok = match exponent {
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            digits(exp)
        }
        None => true,
    };
    mantissa_ok && exponent_ok
}

/// `YYYY-MM-DD` naming a real calendar day.
///
/// A date input serializes its value as unsigned, zero-padded digits; the
/// shape is checked before the calendar so signed or short parts fail.
pub fn is_valid_date(value: &str) -> bool {
    let mut parts = value.split('-');
    let shape_ok = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            year.len() >= 4
                && month.len() == 2
                && day.len() == 2
                && [year, month, day]
                    .iter()
                    .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        }
        _ => false,
    };
    shape_ok
        && NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| date.year() > 0)
            .unwrap_or(false)
}
