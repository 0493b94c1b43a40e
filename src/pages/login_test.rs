use super::*;

// =============================================================
// Login validation
// =============================================================

#[test]
fn validate_login_input_trims_and_requires_both_fields() {
    let data = validate_login_input("  alice  ", " secret1 ").expect("valid");
    assert_eq!(data.username, "alice");
    assert_eq!(data.password, "secret1");

    assert_eq!(
        validate_login_input("", "secret1"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("alice", "   "),
        Err("Enter both username and password.")
    );
}

// =============================================================
// Register validation
// =============================================================

#[test]
fn validate_register_input_applies_backend_rules() {
    assert_eq!(
        validate_register_input("ab", "secret1", "secret1", "", ""),
        Err("Username must be at least 3 characters.")
    );
    assert_eq!(
        validate_register_input("alice", "12345", "12345", "", ""),
        Err("Password must be at least 6 characters.")
    );
    assert_eq!(
        validate_register_input("alice", "secret1", "secret2", "", ""),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_register_input_strips_the_confirmation() {
    let data = validate_register_input("alice", "secret1", " secret1 ", "170", "62.5")
        .expect("valid");
    assert_eq!(data.username, "alice");
    assert_eq!(data.height, Some(170.0));
    assert_eq!(data.weight, Some(62.5));
}

// =============================================================
// Measurements
// =============================================================

#[test]
fn parse_measurement_treats_empty_as_absent() {
    assert_eq!(parse_measurement(""), Ok(None));
    assert_eq!(parse_measurement("   "), Ok(None));
}

#[test]
fn parse_measurement_rejects_non_positive_values() {
    assert_eq!(parse_measurement("0"), Err("Measurements must be positive numbers."));
    assert_eq!(parse_measurement("-5"), Err("Measurements must be positive numbers."));
    assert_eq!(parse_measurement("tall"), Err("Measurements must be positive numbers."));
}
