use crate::relay::RelayError;

pub const ENDPOINT_URL_VAR: &str = "ORDER_RELAY_ENDPOINT_URL";
pub const API_KEY_VAR: &str = "ORDER_RELAY_API_KEY";
pub const API_KEY_TYPE_VAR: &str = "ORDER_RELAY_API_KEY_TYPE";
pub const ORDER_PREFIX_VAR: &str = "ORDER_RELAY_ORDER_PREFIX";
pub const ORDER_SUFFIX_VAR: &str = "ORDER_RELAY_ORDER_SUFFIX";

const DEFAULT_API_KEY_TYPE: &str = "Bearer";

/// Where and how orders are forwarded. Loaded once at startup.
#[derive(Clone)]
pub struct RelayConfig {
    pub endpoint_url: String,
    pub api_key: String,
    /// Authorization scheme, e.g. `Bearer` or `Basic`.
    pub api_key_type: String,
    pub order_number_prefix: String,
    pub order_number_suffix: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint_url = required(&lookup, ENDPOINT_URL_VAR)?;
        let parsed = reqwest::Url::parse(&endpoint_url).map_err(|err| {
            RelayError::Config(format!("{ENDPOINT_URL_VAR} is not a valid URL: {err}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RelayError::Config(format!(
                "{ENDPOINT_URL_VAR} must use http or https"
            )));
        }

        let api_key = required(&lookup, API_KEY_VAR)?;

        let mut config = Self {
            endpoint_url,
            api_key,
            api_key_type: DEFAULT_API_KEY_TYPE.to_string(),
            order_number_prefix: String::new(),
            order_number_suffix: String::new(),
        };

        if let Some(value) = lookup(API_KEY_TYPE_VAR)
            && !value.trim().is_empty()
        {
            config.api_key_type = value.trim().to_string();
        }
        if let Some(value) = lookup(ORDER_PREFIX_VAR) {
            config.order_number_prefix = value;
        }
        if let Some(value) = lookup(ORDER_SUFFIX_VAR) {
            config.order_number_suffix = value;
        }

        Ok(config)
    }

    pub(crate) fn authorization(&self) -> String {
        format!("{} {}", self.api_key_type, self.api_key)
    }
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &"<redacted>")
            .field("api_key_type", &self.api_key_type)
            .field("order_number_prefix", &self.order_number_prefix)
            .field("order_number_suffix", &self.order_number_suffix)
            .finish()
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, RelayError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(RelayError::Config(format!("{name} is required"))),
    }
}
