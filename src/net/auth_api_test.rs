use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn endpoints_prefix_the_configured_base() {
    let base = "https://api.example.com";
    assert_eq!(login_endpoint(base), "https://api.example.com/auth/login");
    assert_eq!(register_endpoint(base), "https://api.example.com/auth/register");
    assert_eq!(profile_endpoint(base), "https://api.example.com/auth/profile");
    assert_eq!(refresh_endpoint(base), "https://api.example.com/auth/refresh");
    assert_eq!(
        update_profile_endpoint(base),
        "https://api.example.com/auth/update_simple_profile"
    );
    assert_eq!(
        change_password_endpoint(base),
        "https://api.example.com/auth/change_password"
    );
    assert_eq!(feedback_endpoint(base), "https://api.example.com/api/feedback");
}

#[test]
fn empty_base_yields_same_origin_paths() {
    assert_eq!(login_endpoint(""), "/auth/login");
    assert_eq!(profile_endpoint(""), "/auth/profile");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(crate::net::bearer("abc"), "Bearer abc");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn failure_messages_carry_the_status() {
    assert_eq!(login_failed_message(500), "login request failed: 500");
    assert_eq!(register_failed_message(409), "register request failed: 409");
    assert_eq!(token_rejected_message(401), "token rejected: 401");
    assert_eq!(refresh_failed_message(401), "token refresh failed: 401");
    assert_eq!(update_profile_failed_message(400), "profile update failed: 400");
    assert_eq!(change_password_failed_message(400), "password change failed: 400");
    assert_eq!(feedback_failed_message(404), "feedback submit failed: 404");
}
