//! Send attempt metadata stored as `order_meta` rows on each order.

mod store;

pub use store::{
    META_ERROR_MESSAGE, META_LINE_ITEMS, META_PAYLOAD, META_RESPONSE_CODE, META_SEND_TIME,
    StoreError, read_send_attempt, write_send_attempt,
};

pub const MODULE: &str = module_path!();
