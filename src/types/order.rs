use serde::{Deserialize, Serialize};
use specta::Type;

/// An order as read from the shop's order tables.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub billing: OrderAddress,
    pub billing_email: String,
    pub billing_phone: String,
    pub shipping: OrderAddress,
    pub shipping_method: String,
    pub payment_method_title: String,
    pub customer_note: String,
    /// Decimal string as stored, e.g. `"4.95"`.
    pub shipping_total: String,
    pub line_items: Vec<OrderLineItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Type)]
pub struct OrderAddress {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct OrderLineItem {
    pub id: i64,
    pub product_id: i64,
    pub variation_id: i64,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub subtotal: String,
    pub total: String,
}
