use std::sync::Arc;

use sqlx::SqlitePool;

use crate::relay::OrderRelay;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub relay: Arc<OrderRelay>,
    /// Bearer token for the admin routes. `None` leaves them open.
    pub admin_api_token: Option<String>,
}
