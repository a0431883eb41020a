//! Field validation rules for request bodies.
//!
//! Each rule appends a `FieldViolation` when the value breaks it, so one pass over a
//! body collects every problem instead of stopping at the first.

use crate::server::error::validation::{FieldViolation, ValidationErrors};

pub const NOT_BLANK: &str = "NotBlank";
pub const SIZE: &str = "Size";

/// Request bodies that check their own fields after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Value must be present and contain at least one non-whitespace character.
pub fn not_blank(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if value.is_none_or(|value| value.trim().is_empty()) {
        errors.push(FieldViolation::new(field, NOT_BLANK, "공백일 수 없습니다"));
    }
}

/// Value length in UTF-16 code units must lie within `min..=max`. An absent value passes.
pub fn size(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) {
    let Some(value) = value else {
        return;
    };
    let len = value.encode_utf16().count();

    if len < min || len > max {
        errors.push(FieldViolation::new(
            field,
            SIZE,
            format!("크기가 {}에서 {} 사이여야 합니다", min, max),
        ));
    }
}

/// Applies both `NotBlank` and `Size`, the pair every text field in the API uses.
pub fn not_blank_sized(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) {
    not_blank(errors, field, value);
    size(errors, field, value, min, max);
}
