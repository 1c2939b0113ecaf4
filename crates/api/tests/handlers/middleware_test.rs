use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use openslot_api::middleware::error_handling::AppError;
use openslot_core::{errors::SlotError, models::range::DateRange};

fn respond(err: SlotError) -> Response {
    AppError::from(err).into_response()
}

#[tokio::test]
async fn test_error_handling_parse() {
    let error = DateRange::parse("yesterday", "2024-01-01").unwrap_err();

    let response = respond(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = SlotError::Validation("Invalid input".to_string());

    let response = respond(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_calendar() {
    let error = SlotError::Calendar(eyre::eyre!("Calendar offline"));

    let response = respond(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = SlotError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = respond(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_parse_error_status() {
    let error = AppError::from(DateRange::parse("2024-01-01", "2024-1-2").unwrap_err());

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}
