// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, parse_price_cents, validate_display_name, validate_identifier};

#[test]
fn test_validate_identifier_accepts_allowed_punctuation() {
    assert!(validate_identifier("AB-12_c", 32, &['-', '_']).is_ok());
}

#[test]
fn test_validate_identifier_reports_offending_character() {
    let result: Result<(), String> = validate_identifier("AB#12", 32, &['-']);
    assert_eq!(result, Err(String::from("character '#' is not allowed")));
}

#[test]
fn test_validate_identifier_enforces_length() {
    assert!(validate_identifier("ABCD", 3, &[]).is_err());
    assert!(validate_identifier("ABC", 3, &[]).is_ok());
}

#[test]
fn test_validate_display_name_trims() {
    assert_eq!(validate_display_name("  Bob  ").unwrap(), "Bob");
}

#[test]
fn test_validate_display_name_rejects_overlong() {
    let result: Result<String, DomainError> = validate_display_name(&"x".repeat(101));
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_parse_price_cents_rejects_overflow() {
    assert!(parse_price_cents("184467440737095517").is_err());
}
