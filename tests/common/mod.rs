#![allow(clippy::expect_used, clippy::unwrap_used, dead_code)]

use std::{fs, sync::Arc};

use order_relay::{
    relay::{OrderRelay, RelayConfig},
    state::AppState,
};
use sqlx::{
    Connection, SqliteConnection, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tempfile::NamedTempFile;

pub const API_KEY: &str = "test-key";

pub struct TestDb {
    pub pool: SqlitePool,
    _db_file: NamedTempFile,
}

pub async fn setup_db() -> TestDb {
    let db_file = NamedTempFile::new().expect("create temp sqlite file");
    let options = SqliteConnectOptions::new()
        .filename(db_file.path())
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_millis(500));

    let mut conn = SqliteConnection::connect_with(&options)
        .await
        .expect("connect sqlite for migrations");
    run_migrations(&mut conn).await.expect("run migrations");
    conn.close().await.expect("close migration conn");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect sqlite");

    TestDb {
        pool,
        _db_file: db_file,
    }
}

async fn run_migrations(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let mut entries: Vec<_> = fs::read_dir("migrations")
        .map_err(sqlx::Error::Io)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|ext| ext.to_str()) == Some("sql"))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let contents = fs::read_to_string(entry.path()).map_err(sqlx::Error::Io)?;
        for stmt in contents.split(';') {
            let stmt = stmt.trim();
            if !stmt.is_empty() {
                sqlx::query(stmt).execute(&mut *conn).await?;
            }
        }
    }
    Ok(())
}

pub fn relay_config(endpoint_url: &str) -> RelayConfig {
    RelayConfig {
        endpoint_url: endpoint_url.to_string(),
        api_key: API_KEY.to_string(),
        api_key_type: "Bearer".to_string(),
        order_number_prefix: "PRE".to_string(),
        order_number_suffix: "SUF".to_string(),
    }
}

pub fn relay(pool: &SqlitePool, endpoint_url: &str) -> OrderRelay {
    OrderRelay::new(pool.clone(), &relay_config(endpoint_url)).expect("build relay")
}

pub fn app_state(pool: &SqlitePool, endpoint_url: &str, admin_api_token: Option<&str>) -> AppState {
    AppState {
        pool: pool.clone(),
        relay: Arc::new(relay(pool, endpoint_url)),
        admin_api_token: admin_api_token.map(str::to_string),
    }
}

/// Seeds order 42 / number 1042 with two line items: A x1 for 10.00 and
/// B x2 for 5.00. Shipping address and billing company are left empty.
pub async fn seed_order(pool: &SqlitePool) -> i64 {
    let order_id = 42;
    sqlx::query(
        r"
        INSERT INTO orders (
            id, order_number,
            billing_first_name, billing_last_name, billing_address_1,
            billing_city, billing_postcode, billing_country,
            billing_email, billing_phone,
            shipping_method, payment_method_title, customer_note, shipping_total
        ) VALUES (?, '1042', 'Ada', 'Lovelace', '12 Analytical Row',
                  'London', 'N1 9GU', 'GB',
                  'ada@example.com', '+44 20 7946 0000',
                  'Flat rate', 'Direct bank transfer', 'Leave at the door', '4.95')
        ",
    )
    .bind(order_id)
    .execute(pool)
    .await
    .expect("insert order");

    for (position, product_id, name, sku, quantity, total) in [
        (0, 101, "Widget", "A", 1, "10.00"),
        (1, 102, "Gadget", "B", 2, "5.00"),
    ] {
        sqlx::query(
            r"
            INSERT INTO order_line_items (
                order_id, position, product_id, name, sku, quantity, subtotal, total
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(order_id)
        .bind(position)
        .bind(product_id)
        .bind(name)
        .bind(sku)
        .bind(quantity)
        .bind(total)
        .bind(total)
        .execute(pool)
        .await
        .expect("insert line item");
    }

    order_id
}

pub async fn meta_row_count(pool: &SqlitePool, order_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM order_meta WHERE order_id = ?")
        .bind(order_id)
        .fetch_one(pool)
        .await
        .expect("count meta rows")
}

/// An address nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/orders")
}
