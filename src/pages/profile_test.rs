use super::*;

// =============================================================
// Password change validation
// =============================================================

#[test]
fn password_change_enforces_minimum_length() {
    assert_eq!(
        validate_password_change("12345", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn password_change_requires_matching_confirmation() {
    assert_eq!(
        validate_password_change("secret1", "secret2"),
        Err("Passwords do not match.")
    );
}

#[test]
fn password_change_trims_both_fields() {
    assert_eq!(
        validate_password_change(" secret1 ", "secret1"),
        Ok("secret1".to_owned())
    );
}

// =============================================================
// Feedback validation
// =============================================================

#[test]
fn feedback_requires_content() {
    assert_eq!(
        validate_feedback_input("   ", "a@b.com"),
        Err("Write some feedback first.")
    );
}

#[test]
fn feedback_email_is_optional() {
    let data = validate_feedback_input("more videos", "  ").expect("valid");
    assert_eq!(data.content, "more videos");
    assert_eq!(data.email, None);

    let data = validate_feedback_input("more videos", " a@b.com ").expect("valid");
    assert_eq!(data.email, Some("a@b.com".to_owned()));
}
