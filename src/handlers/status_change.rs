use axum::{Json, extract::State};

use crate::{
    error::ApiError,
    extractors::ValidJson,
    relay::{NotifyOutcome, RelayError},
    state::AppState,
    types::{StatusChangeEvent, StatusChangeOutcome, StatusChangeResponse},
};

/// Entry point for the shop's order status notifications.
///
/// Ignored statuses and unknown orders are still `200`; only storage failures
/// surface as errors.
pub async fn status_change_handler(
    State(state): State<AppState>,
    ValidJson(event): ValidJson<StatusChangeEvent>,
) -> Result<Json<StatusChangeResponse>, ApiError> {
    let outcome = state
        .relay
        .notify_status_change(event.order_id, &event.old_status, &event.new_status)
        .await
        .map_err(map_relay_error)?;

    let response = match outcome {
        NotifyOutcome::OrderNotFound => StatusChangeResponse {
            outcome: StatusChangeOutcome::OrderNotFound,
            response_code: None,
        },
        NotifyOutcome::StatusIgnored => StatusChangeResponse {
            outcome: StatusChangeOutcome::StatusIgnored,
            response_code: None,
        },
        NotifyOutcome::Sent(record) => StatusChangeResponse {
            outcome: StatusChangeOutcome::Sent,
            response_code: record.response_code,
        },
    };

    Ok(Json(response))
}

fn map_relay_error(err: RelayError) -> ApiError {
    match err {
        RelayError::Orders(crate::orders::StoreError::Db(db))
        | RelayError::Attempts(crate::attempts::StoreError::Db(db)) => ApiError::Db(db),
        other => ApiError::Internal(other.to_string()),
    }
}
