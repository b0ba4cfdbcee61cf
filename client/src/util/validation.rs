//! Field-level input checks shared by the auth forms.
//!
//! These are pure string predicates; the forms decide which check applies to
//! which field and what message to show.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum password length accepted by both forms, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// `local@domain.tld` shape: no whitespace, exactly one `@` separating
/// non-empty parts, and at least one `.` after the `@`.
#[must_use]
pub fn is_well_formed_email(value: &str) -> bool {
    lazy_regex::regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", value)
}

/// Weaker email check: only requires an `@` somewhere in the value.
#[must_use]
pub fn contains_at_sign(value: &str) -> bool {
    value.contains('@')
}

#[must_use]
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}
