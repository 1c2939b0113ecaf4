//! # Slot Handlers
//!
//! HTTP entry point for slot generation. The handler parses the requested
//! range, asks the configured busy-interval provider for conflicts and
//! returns every open hourly slot.

use axum::{Json, extract::State};
use openslot_core::{
    errors::SlotError,
    models::{
        range::DateRange,
        slot::{SlotRequest, SlotResponse},
    },
    slots::generate_slots_within,
};
use std::sync::Arc;
use tracing::debug;

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists the open slots between two dates
///
/// # Endpoint
///
/// ```text
/// POST /available-slots
/// {"date_from": "2024-01-01", "date_to": "2024-01-02"}
/// ```
///
/// # Errors
///
/// * `SlotError::Parse` (400) - either date is not ISO 8601
/// * `SlotError::Calendar` (500) - the busy-interval lookup failed
/// * `SlotError::Internal` (500) - the generation task panicked
///
/// Generation runs on the blocking pool so that a very long range cannot
/// stall a runtime worker or hold off the request timeout.
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    let range = DateRange::parse(&request.date_from, &request.date_to)?;
    debug!(from = %range.from, to = %range.to, "generating slots");

    let slots = tokio::task::spawn_blocking(move || {
        generate_slots_within(&range, state.working_hours, state.busy_provider.as_ref())
    })
    .await
    .map_err(|err| SlotError::Internal(Box::new(err)))??;
    debug!(count = slots.len(), "slots generated");

    Ok(Json(SlotResponse::from(slots)))
}
