use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn plan_endpoints_prefix_the_base() {
    let base = "https://api.example.com";
    assert_eq!(plan_endpoint(base), "https://api.example.com/api/training-plan");
    assert_eq!(
        plan_list_endpoint(base),
        "https://api.example.com/api/training-plan/list"
    );
    assert_eq!(
        plan_item_endpoint(base, 42),
        "https://api.example.com/api/training-plan/42"
    );
}

#[test]
fn trained_dates_endpoint_without_filters_has_no_query() {
    assert_eq!(
        trained_dates_endpoint("", None, None),
        "/api/training-plan/trained-dates"
    );
}

#[test]
fn trained_dates_endpoint_builds_query_pairs() {
    assert_eq!(
        trained_dates_endpoint("", Some("2025"), None),
        "/api/training-plan/trained-dates?year=2025"
    );
    assert_eq!(
        trained_dates_endpoint("", None, Some("03")),
        "/api/training-plan/trained-dates?month=03"
    );
    assert_eq!(
        trained_dates_endpoint("", Some("2025"), Some("03")),
        "/api/training-plan/trained-dates?year=2025&month=03"
    );
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn plan_failure_message_carries_the_status() {
    assert_eq!(plan_request_failed_message(500), "plan request failed: 500");
}
