use super::*;

#[test]
fn videos_endpoint_prefixes_the_base() {
    assert_eq!(
        videos_endpoint("https://api.example.com"),
        "https://api.example.com/api/media/videos"
    );
    assert_eq!(videos_endpoint(""), "/api/media/videos");
}

#[test]
fn videos_failure_message_carries_the_status() {
    assert_eq!(videos_failed_message(401), "video listing failed: 401");
}
