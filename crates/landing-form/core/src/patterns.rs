// File: src/patterns.rs
// Purpose: Format checks for the contact form fields

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const FURIGANA_PATTERN: &str = r"^[ぁ-ん\s]+$";
pub(crate) const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub(crate) const PHONE_PATTERN: &str = r"^[0-9-]+$";

// Hiragana (U+3041..=U+3093) plus whitespace. Katakana and the long vowel mark are rejected.
pub(crate) static FURIGANA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(FURIGANA_PATTERN).unwrap());

// local@domain.tld: no whitespace, exactly one '@', a '.' after it
pub(crate) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

pub(crate) static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());

/// Checks that a reading is written in hiragana (spaces allowed)
pub fn is_hiragana_reading(value: &str) -> bool {
    FURIGANA_REGEX.is_match(value)
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Phone numbers may only contain ASCII digits and hyphens
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
