use serde::{Deserialize, Serialize};
use specta::Type;

/// Outcome of the most recent send for an order. Each send replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct SendAttemptRecord {
    pub send_time: String,
    /// `None` when the request failed before any response arrived.
    pub response_code: Option<i64>,
    /// JSON body exactly as sent.
    pub payload: String,
    pub error_message: String,
    /// Raw line-item collection of the order at send time, as JSON.
    pub line_items: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum SendStatus {
    Success,
    Failed,
}

/// Admin panel view of a send attempt. Blank when nothing was sent yet.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SendAttemptView {
    pub order_id: i64,
    pub send_time: String,
    pub response_code: Option<i64>,
    pub error_message: String,
    pub payload: String,
    pub status: SendStatus,
}
