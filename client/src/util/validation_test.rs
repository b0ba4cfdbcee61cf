use super::*;

#[test]
fn well_formed_email_accepts_basic_addresses() {
    assert!(is_well_formed_email("user@example.com"));
    assert!(is_well_formed_email("a@b.co"));
    assert!(is_well_formed_email("first.last+tag@sub.domain.org"));
}

#[test]
fn well_formed_email_rejects_missing_parts() {
    for bad in ["", "bademail", "@example.com", "user@", "user@example", "user@.com", "user@example."] {
        assert!(!is_well_formed_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn well_formed_email_rejects_whitespace_and_extra_at() {
    for bad in ["us er@example.com", "user@exa mple.com", " user@example.com", "user@@example.com", "a@b@c.com"] {
        assert!(!is_well_formed_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn contains_at_sign_is_weaker_than_well_formed() {
    assert!(contains_at_sign("user@"));
    assert!(contains_at_sign("@"));
    assert!(!is_well_formed_email("user@"));
    assert!(!contains_at_sign("bademail"));
}

#[test]
fn has_min_chars_boundary() {
    assert!(!has_min_chars("short", MIN_PASSWORD_CHARS));
    assert!(!has_min_chars("1234567", MIN_PASSWORD_CHARS));
    assert!(has_min_chars("12345678", MIN_PASSWORD_CHARS));
    assert!(has_min_chars("a much longer password", MIN_PASSWORD_CHARS));
}

#[test]
fn has_min_chars_counts_characters_not_bytes() {
    // Four two-byte characters: eight bytes, four characters.
    assert!(!has_min_chars("éééé", MIN_PASSWORD_CHARS));
    assert!(has_min_chars("éééééééé", MIN_PASSWORD_CHARS));
}
