use std::error::Error as _;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::relay::{RelayConfig, RelayError};

/// What came back from one POST. The response body is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// `None` when no response arrived (DNS, refused connection, timeout).
    pub response_code: Option<u16>,
    /// Reason phrase of the response, or the transport error text.
    pub message: String,
}

/// Posts serialized payloads to the configured endpoint with static headers.
#[derive(Debug, Clone)]
pub struct PayloadSender {
    client: reqwest::Client,
    endpoint_url: String,
}

impl PayloadSender {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let mut authorization = HeaderValue::from_str(&config.authorization())
            .map_err(|_| RelayError::Header("authorization key contains invalid characters"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Sends `body` once and waits for the status line. Failures are folded
    /// into the outcome rather than returned.
    pub async fn send(&self, body: String) -> DeliveryOutcome {
        match self.client.post(&self.endpoint_url).body(body).send().await {
            Ok(response) => {
                let status = response.status();
                DeliveryOutcome {
                    response_code: Some(status.as_u16()),
                    message: status.canonical_reason().unwrap_or_default().to_string(),
                }
            }
            Err(err) => DeliveryOutcome {
                response_code: None,
                message: transport_error_message(&err),
            },
        }
    }
}

fn transport_error_message(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
