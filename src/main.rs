use std::{net::SocketAddr, str::FromStr, sync::Arc};

use order_relay::{
    logger,
    relay::{OrderRelay, RelayConfig},
    router,
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::initialize(logger::filter_from_env())?;

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:order_relay.db".to_string());
    let bind_addr = std::env::var("ORDER_RELAY_BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3002".to_string());
    let admin_api_token = std::env::var("ORDER_RELAY_ADMIN_API_TOKEN")
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    let relay_config = RelayConfig::from_env()?;

    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let relay = OrderRelay::new(pool.clone(), &relay_config)?;
    if admin_api_token.is_none() {
        tracing::warn!("ORDER_RELAY_ADMIN_API_TOKEN not set; admin routes are unauthenticated");
    }

    let state = AppState {
        pool,
        relay: Arc::new(relay),
        admin_api_token,
    };
    let app = router(state);

    let addr: SocketAddr = bind_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, endpoint = %relay_config.endpoint_url, "order relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("order relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
