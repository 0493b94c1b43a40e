use super::*;

#[test]
fn feedback_all_endpoint_prefixes_the_base() {
    assert_eq!(
        feedback_all_endpoint("https://api.example.com"),
        "https://api.example.com/api/feedback_all"
    );
}

#[test]
fn feedback_all_failure_message_carries_the_status() {
    assert_eq!(feedback_all_failed_message(401), "feedback listing failed: 401");
}
