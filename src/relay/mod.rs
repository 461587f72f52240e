mod config;
mod error;
mod listener;
mod payload;
mod sender;

pub use config::{
    API_KEY_TYPE_VAR, API_KEY_VAR, ENDPOINT_URL_VAR, ORDER_PREFIX_VAR, ORDER_SUFFIX_VAR,
    RelayConfig,
};
pub use error::RelayError;
pub use listener::{NotifyOutcome, OrderRelay, TRIGGER_STATUSES, is_trigger_status};
pub use payload::{OrderNumberFormat, build_payload};
pub use sender::{DeliveryOutcome, PayloadSender};

pub const MODULE: &str = module_path!();
