use super::*;

#[test]
fn login_route_is_public() {
    let login = find(LOGIN_PATH).expect("login route exists");
    assert!(!login.requires_auth);
    assert_eq!(login.name, "Login");
}

#[test]
fn main_profile_admin_require_auth() {
    for path in ["/main", "/profile", "/admin"] {
        let route = find(path).unwrap_or_else(|| panic!("{path} missing"));
        assert!(route.requires_auth, "{path} should require auth");
    }
}

#[test]
fn find_ignores_trailing_slash() {
    assert_eq!(find("/main/"), find("/main"));
    assert!(find("/main/").is_some());
}

#[test]
fn find_unknown_path_is_none() {
    assert!(find("/does-not-exist").is_none());
    assert!(find("").is_none());
}

#[test]
fn root_path_is_not_a_descriptor() {
    // "/" is handled by an unconditional redirect, not the guard.
    assert!(find("/").is_none());
}
