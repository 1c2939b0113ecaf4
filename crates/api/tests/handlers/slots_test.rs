use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{MockCalendar, TestContext};

fn slots_of(body: &Value) -> Vec<&str> {
    body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot.as_str().unwrap())
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_single_day_skips_busy_hour() {
    let server = TestContext::new().server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": "2024-01-01", "date_to": "2024-01-01" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        slots_of(&body),
        vec![
            "2024-01-01T09:00:00",
            "2024-01-01T10:00:00",
            "2024-01-01T11:00:00",
            "2024-01-01T12:00:00",
            "2024-01-01T14:00:00",
            "2024-01-01T15:00:00",
            "2024-01-01T16:00:00",
            "2024-01-01T17:00:00",
        ]
    );
}

#[tokio::test]
async fn test_multi_day_range() {
    let server = TestContext::new().server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": "2024-01-01", "date_to": "2024-01-02" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let slots = slots_of(&body);
    assert_eq!(slots.len(), 17);
    assert_eq!(slots[0], "2024-01-01T09:00:00");
    assert_eq!(slots[16], "2024-01-02T17:00:00");
    assert!(!slots.contains(&"2024-01-01T13:00:00"));
}

#[tokio::test]
async fn test_inverted_range_returns_empty_list() {
    let server = TestContext::new().server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": "2024-01-05", "date_to": "2024-01-01" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "slots": [] }));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let server = TestContext::new().server();
    let request = json!({ "date_from": "2024-06-01", "date_to": "2024-06-07" });

    let first: Value = server.post("/available-slots").json(&request).await.json();
    let second: Value = server.post("/available-slots").json(&request).await.json();

    assert_eq!(first, second);
}

#[rstest]
#[case("2024-01-01", "01/02/2024", "date_to")]
#[case("Jan 1", "2024-01-02", "date_from")]
#[case("2024-02-30", "2024-03-01", "date_from")]
#[case("2024-1-1", "2024-01-01", "date_from")]
#[case("2024-01-01", " 2024-01-01", "date_to")]
#[case("2024-01-01 ", "2024-01-01", "date_from")]
#[case("2024 - 01 - 01", "2024-01-01", "date_from")]
#[case("+2024-01-01", "2024-01-01", "date_from")]
#[case("2024-01-01", "2024-01-01T9:5", "date_to")]
#[tokio::test]
async fn test_invalid_dates_are_bad_requests(
    #[case] date_from: &str,
    #[case] date_to: &str,
    #[case] field: &str,
) {
    let server = TestContext::new().server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": date_from, "date_to": date_to }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains(field));
}

#[tokio::test]
async fn test_full_year_range() {
    let server = TestContext::new().server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": "2023-01-01", "date_to": "2023-12-31" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let slots = slots_of(&body);
    assert_eq!(slots.len(), 365 * 9 - 1);
    assert_eq!(slots.last().copied(), Some("2023-12-31T17:00:00"));
}

#[tokio::test]
async fn test_missing_field_is_rejected_by_extractor() {
    let server = TestContext::new().server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": "2024-01-01" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wrong_field_type_is_rejected_by_extractor() {
    let server = TestContext::new().server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": 20240101, "date_to": "2024-01-01" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_injected_calendar_drives_exclusions() {
    let mut calendar = MockCalendar::new();
    calendar.expect_busy_between().times(1).returning(|range| {
        let day = range.from;
        Ok(vec![openslot_core::BusyInterval::new(
            day.and_hms_opt(9, 0, 0).unwrap(),
            day.and_hms_opt(17, 0, 0).unwrap(),
        )])
    });
    let server = TestContext::with_calendar(calendar).server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": "2024-01-01", "date_to": "2024-01-01" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "slots": ["2024-01-01T17:00:00"] }));
}

#[tokio::test]
async fn test_calendar_failure_is_server_error() {
    let mut calendar = MockCalendar::new();
    calendar
        .expect_busy_between()
        .returning(|_| Err(eyre::eyre!("calendar offline").into()));
    let server = TestContext::with_calendar(calendar).server();

    let response = server
        .post("/available-slots")
        .json(&json!({ "date_from": "2024-01-01", "date_to": "2024-01-01" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Calendar lookup failed: calendar offline" }));
}
