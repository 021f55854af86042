// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Maximum length of a SKU.
pub const MAX_SKU_LEN: usize = 32;

/// Maximum length of an item, staff or supplier name.
pub const MAX_NAME_LEN: usize = 100;

/// Validates an identifier-like value (SKU or username).
///
/// The value must be non-empty, no longer than `max_len`, and consist only
/// of ASCII alphanumerics and the characters in `extra`.
///
/// # Arguments
///
/// * `value` - The raw value to check
/// * `max_len` - The maximum number of characters
/// * `extra` - Additional permitted punctuation characters
///
/// # Errors
///
/// Returns a description of the first violated rule. Callers wrap it in the
/// field-specific `DomainError` variant.
pub fn validate_identifier(value: &str, max_len: usize, extra: &[char]) -> Result<(), String> {
    if value.is_empty() {
        return Err(String::from("must not be empty"));
    }

    if value.chars().count() > max_len {
        return Err(format!("must be at most {max_len} characters"));
    }

    if let Some(bad) = value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !extra.contains(c))
    {
        return Err(format!("character '{bad}' is not allowed"));
    }

    Ok(())
}

/// Validates a human-readable name and returns its trimmed form.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the trimmed name is empty or longer
/// than `MAX_NAME_LEN` characters.
pub fn validate_display_name(value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();

    // Rule: name must not be blank
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: name length is bounded
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidName(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }

    Ok(trimmed.to_string())
}

/// Parses a price such as `12`, `12.5` or `12.50` into integer cents.
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the text is not a non-negative
/// decimal amount with at most two fractional digits.
pub fn parse_price_cents(text: &str) -> Result<u64, DomainError> {
    let invalid = || DomainError::InvalidPrice(format!("'{text}' is not a valid amount"));
    let trimmed: &str = text.trim();

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() || fraction.len() > 2 {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let whole_value: u64 = whole.parse().map_err(|_| invalid())?;
    let fraction_value: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    whole_value
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction_value))
        .ok_or_else(invalid)
}
