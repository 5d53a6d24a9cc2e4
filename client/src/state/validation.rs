//! Contact form field validation rules.
//!
//! Rules run on the trimmed value in a fixed precedence; the first rule that
//! applies decides the outcome:
//!
//! 1. required and empty
//! 2. email fields with a value must look like `local@domain.tld`
//! 3. phone fields with a value must use digits, spaces, `-`, `+`, `(`, `)`
//!    and be at least ten characters long
//! 4. select fields must have a non-empty value
//!
//! Anything else is valid.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::OnceLock;

use regex::Regex;

pub const MIN_PHONE_LEN: usize = 10;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^[0-9\s\-+()]+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select,
}

impl FieldKind {
    /// Classify a form control from its tag name and `type` attribute.
    #[must_use]
    pub fn from_dom(tag_name: &str, input_type: &str) -> Self {
        if tag_name.eq_ignore_ascii_case("select") {
            return Self::Select;
        }
        if tag_name.eq_ignore_ascii_case("textarea") {
            return Self::TextArea;
        }
        match input_type.to_ascii_lowercase().as_str() {
            "email" => Self::Email,
            "tel" => Self::Tel,
            _ => Self::Text,
        }
    }
}

/// A form control's validation-relevant state at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSnapshot {
    /// `name` attribute, falling back to `id`; empty when the control has neither.
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please select an option")]
    MissingSelection,
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

fn phone_regex() -> Option<&'static Regex> {
    static PHONE: OnceLock<Option<Regex>> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).ok()).as_ref()
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value))
}

#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    phone_regex().is_some_and(|re| re.is_match(value)) && value.chars().count() >= MIN_PHONE_LEN
}

/// Validate one control.
///
/// # Errors
///
/// Returns the first failing rule as a [`ValidationError`]; its `Display`
/// text is the message shown under the field.
pub fn validate(kind: FieldKind, required: bool, raw_value: &str) -> Result<(), ValidationError> {
    let value = raw_value.trim();
    if required && value.is_empty() {
        return Err(ValidationError::Required);
    }
    match kind {
        FieldKind::Email if !value.is_empty() && !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Tel if !value.is_empty() && !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        FieldKind::Select if value.is_empty() => Err(ValidationError::MissingSelection),
        _ => Ok(()),
    }
}

/// Validate a snapshot.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_snapshot(field: &FieldSnapshot) -> Result<(), ValidationError> {
    validate(field.kind, field.required, &field.value)
}

/// While typing, only fields already flagged invalid are re-checked, so a
/// first draft is not interrupted by errors.
#[must_use]
pub fn revalidates_on_input(marked_invalid: bool) -> bool {
    marked_invalid
}
