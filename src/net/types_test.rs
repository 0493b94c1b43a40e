use super::*;

// =============================================================
// Envelope
// =============================================================

#[test]
fn success_envelope_unwraps_data() {
    let env: Envelope<AuthSession> = serde_json::from_str(
        r#"{"code": 200, "message": "ok",
            "data": {"token": "abc",
                     "user": {"username": "alice", "role": "user"}}}"#,
    )
    .expect("valid envelope");
    assert!(env.is_success());
    let session = env.into_data().expect("data present");
    assert_eq!(session.token, "abc");
    assert_eq!(session.user.username, "alice");
    assert_eq!(session.user.id, None);
}

#[test]
fn error_envelope_yields_its_message() {
    let env: Envelope<AuthSession> =
        serde_json::from_str(r#"{"code": 401, "message": "wrong password", "data": null}"#)
            .expect("valid envelope");
    assert!(!env.is_success());
    assert_eq!(env.into_data(), Err("wrong password".to_owned()));
}

#[test]
fn envelope_tolerates_missing_data_field() {
    let env: Envelope<RefreshData> =
        serde_json::from_str(r#"{"code": 200, "message": "ok"}"#).expect("valid envelope");
    assert_eq!(env.into_data(), Err("missing response data".to_owned()));
}

// =============================================================
// Plan items
// =============================================================

#[test]
fn plan_item_round_trips_actual_count_as_camel_case() {
    let item = PlanItem {
        id: Some(7),
        date: "2025-03-01".to_owned(),
        project: "pushups".to_owned(),
        target: 30,
        note: String::new(),
        completed: Some(true),
        actual_count: Some(28),
    };
    let json = serde_json::to_value(&item).expect("serializable");
    assert_eq!(json["actualCount"], 28);
    assert!(json.get("actual_count").is_none());
}

#[test]
fn new_plan_item_omits_server_side_fields() {
    let item = PlanItem {
        id: None,
        date: "2025-03-01".to_owned(),
        project: "squats".to_owned(),
        target: 50,
        note: "light".to_owned(),
        completed: None,
        actual_count: None,
    };
    let json = serde_json::to_value(&item).expect("serializable");
    assert!(json.get("id").is_none());
    assert!(json.get("completed").is_none());
    assert!(json.get("actualCount").is_none());
}

#[test]
fn plan_update_serializes_only_set_fields() {
    let update = PlanUpdate {
        completed: Some(true),
        actual_count: Some(12),
        ..PlanUpdate::default()
    };
    let json = serde_json::to_value(&update).expect("serializable");
    assert_eq!(json["completed"], true);
    assert_eq!(json["actualCount"], 12);
    assert!(json.get("target").is_none());
    assert!(json.get("note").is_none());
}

// =============================================================
// Register / feedback bodies
// =============================================================

#[test]
fn register_data_omits_absent_measurements() {
    let data = RegisterData {
        username: "bob".to_owned(),
        password: "secret".to_owned(),
        height: None,
        weight: Some(72.5),
    };
    let json = serde_json::to_value(&data).expect("serializable");
    assert!(json.get("height").is_none());
    assert_eq!(json["weight"], 72.5);
}

#[test]
fn feedback_without_email_omits_the_field() {
    let data = FeedbackData {
        content: "more videos please".to_owned(),
        email: None,
    };
    let json = serde_json::to_value(&data).expect("serializable");
    assert!(json.get("email").is_none());
}

// =============================================================
// Listings
// =============================================================

#[test]
fn plan_list_deserializes_list_and_total() {
    let list: PlanList = serde_json::from_str(
        r#"{"list": [{"id": 1, "date": "2025-03-01", "project": "rows",
                      "target": 20, "note": "", "completed": false,
                      "actualCount": 0}],
            "total": 1}"#,
    )
    .expect("valid list");
    assert_eq!(list.total, 1);
    assert_eq!(list.list[0].actual_count, Some(0));
}

#[test]
fn teaching_video_deserializes() {
    let video: TeachingVideo = serde_json::from_str(
        r#"{"id": 3, "title": "Warmup", "thumbnail": "/thumbnail/warmup.jpg",
            "url": "/video/warmup.mp4", "duration": "03:12"}"#,
    )
    .expect("valid video");
    assert_eq!(video.title, "Warmup");
    assert_eq!(video.duration, "03:12");
}
