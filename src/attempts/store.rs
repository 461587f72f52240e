use sqlx::SqlitePool;

use crate::types::SendAttemptRecord;

pub const META_SEND_TIME: &str = "_api_send_time";
pub const META_RESPONSE_CODE: &str = "_api_response_code";
pub const META_PAYLOAD: &str = "_api_payload";
pub const META_ERROR_MESSAGE: &str = "_api_error_message";
pub const META_LINE_ITEMS: &str = "_api_line_items";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("send attempt store failed: {0}")]
    Db(#[from] sqlx::Error),
    #[error("invalid send attempt meta: {0}")]
    Parse(String),
}

/// Replaces every send attempt field of the order in one transaction, so
/// concurrent writers for the same order leave exactly one whole record.
pub async fn write_send_attempt(
    pool: &SqlitePool,
    order_id: i64,
    record: &SendAttemptRecord,
) -> Result<(), StoreError> {
    let response_code = record.response_code.map(|code| code.to_string());
    let fields: [(&str, Option<&str>); 5] = [
        (META_SEND_TIME, Some(record.send_time.as_str())),
        (META_RESPONSE_CODE, response_code.as_deref()),
        (META_PAYLOAD, Some(record.payload.as_str())),
        (META_ERROR_MESSAGE, Some(record.error_message.as_str())),
        (META_LINE_ITEMS, Some(record.line_items.as_str())),
    ];

    let mut tx = pool.begin().await?;

    for (key, value) in fields {
        sqlx::query(
            r"
            INSERT INTO order_meta (order_id, meta_key, meta_value)
            VALUES (?, ?, ?)
            ON CONFLICT(order_id, meta_key) DO UPDATE SET
                meta_value = excluded.meta_value
            ",
        )
        .bind(order_id)
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

/// Reads back the last send attempt. `Ok(None)` when the order was never sent.
pub async fn read_send_attempt(
    pool: &SqlitePool,
    order_id: i64,
) -> Result<Option<SendAttemptRecord>, StoreError> {
    let rows = sqlx::query_as::<_, MetaRow>(
        r"
        SELECT meta_key, meta_value
        FROM order_meta
        WHERE order_id = ?
          AND meta_key IN (?, ?, ?, ?, ?)
        ",
    )
    .bind(order_id)
    .bind(META_SEND_TIME)
    .bind(META_RESPONSE_CODE)
    .bind(META_PAYLOAD)
    .bind(META_ERROR_MESSAGE)
    .bind(META_LINE_ITEMS)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return Ok(None);
    }

    let mut record = SendAttemptRecord {
        send_time: String::new(),
        response_code: None,
        payload: String::new(),
        error_message: String::new(),
        line_items: String::new(),
    };

    for row in rows {
        let value = row.meta_value.unwrap_or_default();
        match row.meta_key.as_str() {
            META_SEND_TIME => record.send_time = value,
            META_RESPONSE_CODE => record.response_code = parse_response_code(&value)?,
            META_PAYLOAD => record.payload = value,
            META_ERROR_MESSAGE => record.error_message = value,
            META_LINE_ITEMS => record.line_items = value,
            _ => {}
        }
    }

    Ok(Some(record))
}

fn parse_response_code(value: &str) -> Result<Option<i64>, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|err| StoreError::Parse(format!("{META_RESPONSE_CODE}: {err}")))
}

#[derive(sqlx::FromRow)]
struct MetaRow {
    meta_key: String,
    meta_value: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::parse_response_code;

    #[test]
    fn blank_response_code_reads_as_absent() {
        assert_eq!(parse_response_code("").unwrap(), None);
        assert_eq!(parse_response_code("  ").unwrap(), None);
    }

    #[test]
    fn numeric_response_code_is_parsed() {
        assert_eq!(parse_response_code("404").unwrap(), Some(404));
    }

    #[test]
    fn garbage_response_code_is_rejected() {
        assert!(parse_response_code("teapot").is_err());
    }
}
