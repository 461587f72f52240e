use sqlx::SqlitePool;

use crate::types::{Order, OrderAddress, OrderLineItem};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("order lookup failed: {0}")]
    Db(#[from] sqlx::Error),
}

/// Loads an order with its line items. `Ok(None)` when the id is unknown.
pub async fn find_order(pool: &SqlitePool, order_id: i64) -> Result<Option<Order>, StoreError> {
    let Some(row) = sqlx::query_as::<_, OrderRow>(
        r"
        SELECT
            id,
            order_number,
            billing_first_name,
            billing_last_name,
            billing_company,
            billing_address_1,
            billing_address_2,
            billing_city,
            billing_state,
            billing_postcode,
            billing_country,
            billing_email,
            billing_phone,
            shipping_first_name,
            shipping_last_name,
            shipping_company,
            shipping_address_1,
            shipping_address_2,
            shipping_city,
            shipping_state,
            shipping_postcode,
            shipping_country,
            shipping_method,
            payment_method_title,
            customer_note,
            shipping_total
        FROM orders
        WHERE id = ?
        ",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?
    else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, LineItemRow>(
        r"
        SELECT id, product_id, variation_id, name, sku, quantity, subtotal, total
        FROM order_line_items
        WHERE order_id = ?
        ORDER BY position ASC, id ASC
        ",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    Ok(Some(row.into_order(items)))
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    order_number: String,
    billing_first_name: String,
    billing_last_name: String,
    billing_company: String,
    billing_address_1: String,
    billing_address_2: String,
    billing_city: String,
    billing_state: String,
    billing_postcode: String,
    billing_country: String,
    billing_email: String,
    billing_phone: String,
    shipping_first_name: String,
    shipping_last_name: String,
    shipping_company: String,
    shipping_address_1: String,
    shipping_address_2: String,
    shipping_city: String,
    shipping_state: String,
    shipping_postcode: String,
    shipping_country: String,
    shipping_method: String,
    payment_method_title: String,
    customer_note: String,
    shipping_total: String,
}

impl OrderRow {
    fn into_order(self, items: Vec<LineItemRow>) -> Order {
        Order {
            id: self.id,
            order_number: self.order_number,
            billing: OrderAddress {
                first_name: self.billing_first_name,
                last_name: self.billing_last_name,
                company: self.billing_company,
                address_1: self.billing_address_1,
                address_2: self.billing_address_2,
                city: self.billing_city,
                state: self.billing_state,
                postcode: self.billing_postcode,
                country: self.billing_country,
            },
            billing_email: self.billing_email,
            billing_phone: self.billing_phone,
            shipping: OrderAddress {
                first_name: self.shipping_first_name,
                last_name: self.shipping_last_name,
                company: self.shipping_company,
                address_1: self.shipping_address_1,
                address_2: self.shipping_address_2,
                city: self.shipping_city,
                state: self.shipping_state,
                postcode: self.shipping_postcode,
                country: self.shipping_country,
            },
            shipping_method: self.shipping_method,
            payment_method_title: self.payment_method_title,
            customer_note: self.customer_note,
            shipping_total: self.shipping_total,
            line_items: items.into_iter().map(OrderLineItem::from).collect(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct LineItemRow {
    id: i64,
    product_id: i64,
    variation_id: i64,
    name: String,
    sku: String,
    quantity: i64,
    subtotal: String,
    total: String,
}

impl From<LineItemRow> for OrderLineItem {
    fn from(row: LineItemRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            variation_id: row.variation_id,
            name: row.name,
            sku: row.sku,
            quantity: row.quantity,
            subtotal: row.subtotal,
            total: row.total,
        }
    }
}
