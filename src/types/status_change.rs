use serde::{Deserialize, Serialize};
use specta::Type;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct StatusChangeEvent {
    pub order_id: i64,
    pub old_status: String,
    pub new_status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum StatusChangeOutcome {
    Sent,
    StatusIgnored,
    OrderNotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct StatusChangeResponse {
    pub outcome: StatusChangeOutcome,
    pub response_code: Option<i64>,
}
