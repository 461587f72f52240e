use axum::{Json, extract::State};

use crate::{
    attempts::{StoreError, read_send_attempt},
    error::ApiError,
    extractors::ValidPath,
    panel::{build_view, render_panel},
    state::AppState,
    types::SendAttemptView,
};

pub async fn send_attempt_handler(
    State(state): State<AppState>,
    ValidPath(order_id): ValidPath<i64>,
) -> Result<Json<SendAttemptView>, ApiError> {
    let view = load_view(&state, order_id).await?;
    Ok(Json(view))
}

/// Plain-text panel shown beside the order in the shop admin.
pub async fn panel_handler(
    State(state): State<AppState>,
    ValidPath(order_id): ValidPath<i64>,
) -> Result<String, ApiError> {
    let view = load_view(&state, order_id).await?;
    Ok(render_panel(&view))
}

async fn load_view(state: &AppState, order_id: i64) -> Result<SendAttemptView, ApiError> {
    let record = read_send_attempt(&state.pool, order_id)
        .await
        .map_err(map_store_error)?;
    Ok(build_view(order_id, record))
}

fn map_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::Db(db) => ApiError::Db(db),
        StoreError::Parse(message) => ApiError::Internal(message),
    }
}
