use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::{
    attempts::write_send_attempt,
    orders::find_order,
    relay::{
        OrderNumberFormat, PayloadSender, RelayConfig, RelayError, build_payload,
    },
    types::{Order, SendAttemptRecord},
};

/// Statuses that forward the order. Matched exactly.
pub const TRIGGER_STATUSES: [&str; 3] = ["processing", "on-hold", "completed"];

pub fn is_trigger_status(status: &str) -> bool {
    TRIGGER_STATUSES.contains(&status)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    OrderNotFound,
    StatusIgnored,
    Sent(SendAttemptRecord),
}

/// Forwards orders when the shop reports a qualifying status change.
///
/// Built once at startup and shared through application state; the shop (or
/// the status-change route) calls [`OrderRelay::notify_status_change`].
#[derive(Debug, Clone)]
pub struct OrderRelay {
    pool: SqlitePool,
    sender: PayloadSender,
    order_number: OrderNumberFormat,
}

impl OrderRelay {
    pub fn new(pool: SqlitePool, config: &RelayConfig) -> Result<Self, RelayError> {
        Ok(Self {
            pool,
            sender: PayloadSender::new(config)?,
            order_number: OrderNumberFormat {
                prefix: config.order_number_prefix.clone(),
                suffix: config.order_number_suffix.clone(),
            },
        })
    }

    #[tracing::instrument(name = "status_change", skip(self), fields(endpoint = self.sender.endpoint_url()))]
    pub async fn notify_status_change(
        &self,
        order_id: i64,
        old_status: &str,
        new_status: &str,
    ) -> Result<NotifyOutcome, RelayError> {
        let Some(order) = find_order(&self.pool, order_id).await? else {
            tracing::debug!("order not found, nothing to send");
            return Ok(NotifyOutcome::OrderNotFound);
        };

        if !is_trigger_status(new_status) {
            tracing::debug!("status does not trigger a send");
            return Ok(NotifyOutcome::StatusIgnored);
        }

        let record = self.send_order(&order).await?;
        Ok(NotifyOutcome::Sent(record))
    }

    /// Posts the order once and overwrites its send attempt record.
    pub async fn send_order(&self, order: &Order) -> Result<SendAttemptRecord, RelayError> {
        let payload = build_payload(order, &self.order_number);
        let body = serde_json::to_string(&payload)?;
        let line_items = serde_json::to_string(&order.line_items)?;

        let outcome = self.sender.send(body.clone()).await;

        match outcome.response_code {
            Some(code) if (200..300).contains(&code) => {
                tracing::info!(order_id = order.id, response_code = code, "order sent");
            }
            Some(code) => {
                tracing::warn!(
                    order_id = order.id,
                    response_code = code,
                    message = %outcome.message,
                    "order endpoint rejected the payload"
                );
            }
            None => {
                tracing::warn!(
                    order_id = order.id,
                    error = %outcome.message,
                    "order endpoint unreachable"
                );
            }
        }

        let record = SendAttemptRecord {
            send_time: format_utc(Utc::now()),
            response_code: outcome.response_code.map(i64::from),
            payload: body,
            error_message: outcome.message,
            line_items,
        };

        write_send_attempt(&self.pool, order.id, &record).await?;

        Ok(record)
    }
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
