//! Read-only admin view of an order's last send attempt.

use std::fmt::Write as _;

use crate::types::{SendAttemptRecord, SendAttemptView, SendStatus};

const SUCCESS_LINE: &str = "Success!";
const FAILED_LINE: &str = "Failed. Check the error message and payload for debugging information.";

/// Only a recorded 2xx code counts as success.
pub fn derive_status(response_code: Option<i64>) -> SendStatus {
    match response_code {
        Some(code) if (200..300).contains(&code) => SendStatus::Success,
        _ => SendStatus::Failed,
    }
}

pub fn build_view(order_id: i64, record: Option<SendAttemptRecord>) -> SendAttemptView {
    let Some(record) = record else {
        return SendAttemptView {
            order_id,
            send_time: String::new(),
            response_code: None,
            error_message: String::new(),
            payload: String::new(),
            status: SendStatus::Failed,
        };
    };

    SendAttemptView {
        order_id,
        status: derive_status(record.response_code),
        payload: pretty_payload(&record.payload),
        send_time: record.send_time,
        response_code: record.response_code,
        error_message: record.error_message,
    }
}

pub fn render_panel(view: &SendAttemptView) -> String {
    let code = view
        .response_code
        .map(|code| code.to_string())
        .unwrap_or_default();
    let status = match view.status {
        SendStatus::Success => SUCCESS_LINE,
        SendStatus::Failed => FAILED_LINE,
    };

    let mut out = String::new();
    let _ = writeln!(out, "API Send Time: {}", view.send_time);
    let _ = writeln!(out, "API Response Code: {code}");
    let _ = writeln!(out, "API Error Message: {}", view.error_message);
    let _ = writeln!(out, "API Payload:");
    if !view.payload.is_empty() {
        let _ = writeln!(out, "{}", view.payload);
    }
    let _ = writeln!(out, "API Status: {status}");
    out
}

// Stored payloads are compact JSON; fall back to the raw text if it doesn't parse.
fn pretty_payload(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| raw.to_string())
}
