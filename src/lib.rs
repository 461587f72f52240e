//! Forwards shop orders to an external HTTP endpoint when their status changes
//! and keeps the last send attempt on the order for the admin panel.

pub mod attempts;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logger;
pub mod orders;
pub mod panel;
pub mod relay;
pub mod state;
pub mod types;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    auth::admin_auth,
    handlers::{
        admin::{panel_handler, send_attempt_handler},
        status_change::status_change_handler,
    },
    state::AppState,
};

/// Status-change route for the shop plus the token-guarded admin routes.
pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/orders/:order_id/send-attempt", get(send_attempt_handler))
        .route("/orders/:order_id/panel", get(panel_handler))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth));

    Router::new()
        .route("/internal/orders/status-changed", post(status_change_handler))
        .nest("/api/admin", admin)
        .with_state(state)
}
