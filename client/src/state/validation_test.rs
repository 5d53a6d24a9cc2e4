use super::*;

// =============================================================
// Required precedence
// =============================================================

#[test]
fn required_empty_is_invalid_for_every_kind() {
    for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Tel, FieldKind::TextArea, FieldKind::Select] {
        assert_eq!(validate(kind, true, ""), Err(ValidationError::Required));
        assert_eq!(validate(kind, true, "   \t"), Err(ValidationError::Required));
    }
}

#[test]
fn required_message_text() {
    assert_eq!(ValidationError::Required.to_string(), "This field is required");
}

#[test]
fn optional_empty_text_email_and_phone_are_valid() {
    assert_eq!(validate(FieldKind::Text, false, ""), Ok(()));
    assert_eq!(validate(FieldKind::Email, false, ""), Ok(()));
    assert_eq!(validate(FieldKind::Tel, false, "  "), Ok(()));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_pattern_accepts_simple_addresses() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("a.b+c@sub.example.co"));
    assert!(is_valid_email("x@y.z"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    assert!(!is_valid_email("jane"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("jane@.com"));
    assert!(!is_valid_email("jane doe@example.com"));
    assert!(!is_valid_email("jane@@example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn email_field_trims_before_checking() {
    assert_eq!(validate(FieldKind::Email, true, "  jane@example.com "), Ok(()));
    assert_eq!(validate(FieldKind::Email, true, "jane@"), Err(ValidationError::InvalidEmail));
    assert_eq!(
        ValidationError::InvalidEmail.to_string(),
        "Please enter a valid email address"
    );
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_accepts_formatted_numbers_of_ten_or_more() {
    assert!(is_valid_phone("5551234567"));
    assert!(is_valid_phone("+1 (555) 123-4567"));
    assert!(is_valid_phone("555 123 45"));
}

#[test]
fn phone_rejects_short_or_foreign_characters() {
    assert!(!is_valid_phone("555-1234"));
    assert!(!is_valid_phone("555.123.4567"));
    assert!(!is_valid_phone("call me maybe"));
    assert!(!is_valid_phone("٥٥٥١٢٣٤٥٦٧"));
}

#[test]
fn phone_length_counts_characters_not_bytes() {
    // U+00A0 and U+3000 are whitespace the pattern accepts but encode as 2 and 3 bytes.
    assert!(!is_valid_phone("1234\u{00A0}5678"));
    assert!(!is_valid_phone("123\u{3000}45678"));
    assert!(is_valid_phone("12345\u{00A0}6789"));
    assert_eq!(validate(FieldKind::Tel, true, "1234\u{00A0}5678"), Err(ValidationError::InvalidPhone));
}

#[test]
fn phone_field_reports_phone_message() {
    assert_eq!(validate(FieldKind::Tel, false, "12345"), Err(ValidationError::InvalidPhone));
    assert_eq!(ValidationError::InvalidPhone.to_string(), "Please enter a valid phone number");
}

// =============================================================
// Select + other kinds
// =============================================================

#[test]
fn optional_empty_select_still_needs_an_option() {
    assert_eq!(validate(FieldKind::Select, false, ""), Err(ValidationError::MissingSelection));
    assert_eq!(validate(FieldKind::Select, false, "buy"), Ok(()));
    assert_eq!(ValidationError::MissingSelection.to_string(), "Please select an option");
}

#[test]
fn text_and_textarea_accept_any_value() {
    assert_eq!(validate(FieldKind::Text, true, "anything @ all"), Ok(()));
    assert_eq!(validate(FieldKind::TextArea, true, "hello"), Ok(()));
}

#[test]
fn validating_a_valid_field_twice_is_stable() {
    let field = FieldSnapshot {
        name: "email".to_owned(),
        kind: FieldKind::Email,
        required: true,
        value: "jane@example.com".to_owned(),
    };
    assert_eq!(validate_snapshot(&field), Ok(()));
    assert_eq!(validate_snapshot(&field), Ok(()));
}

// =============================================================
// Classification + input policy
// =============================================================

#[test]
fn field_kind_from_dom() {
    assert_eq!(FieldKind::from_dom("SELECT", "select-one"), FieldKind::Select);
    assert_eq!(FieldKind::from_dom("TEXTAREA", "textarea"), FieldKind::TextArea);
    assert_eq!(FieldKind::from_dom("INPUT", "email"), FieldKind::Email);
    assert_eq!(FieldKind::from_dom("INPUT", "TEL"), FieldKind::Tel);
    assert_eq!(FieldKind::from_dom("INPUT", "text"), FieldKind::Text);
    assert_eq!(FieldKind::from_dom("INPUT", ""), FieldKind::Text);
}

#[test]
fn input_events_only_revalidate_invalid_fields() {
    assert!(revalidates_on_input(true));
    assert!(!revalidates_on_input(false));
}
