//! # Error Handling Middleware
//!
//! Maps domain errors from `openslot-core` to HTTP status codes and JSON
//! error bodies of the form `{"error": "<message>"}`.
//!
//! Malformed request bodies never reach this module: axum's `Json` extractor
//! rejects them with its own client-error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use openslot_core::errors::SlotError;
use serde_json::json;
use tracing::{error, warn};

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use openslot_api::middleware::error_handling::AppError;
/// use openslot_core::DateRange;
///
/// async fn handler(from: String, to: String) -> Result<Json<DateRange>, AppError> {
///     let range = DateRange::parse(&from, &to)?;
///     Ok(Json(range))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SlotError::Parse { .. } => StatusCode::BAD_REQUEST,
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::Calendar(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SlotError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        if status.is_server_error() {
            error!(error = ?self.0, "request failed");
        } else {
            warn!(%message, "rejected request");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows `?` on `SlotResult` inside handlers
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}
