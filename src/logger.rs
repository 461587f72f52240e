use tracing_subscriber::{EnvFilter, filter::ParseError, fmt::time::UtcTime};

use crate::{attempts, handlers, relay};

pub const LOG_FILTER_VAR: &str = "ORDER_RELAY_LOG";

const TARGETS: &[&str] = &[
    relay::MODULE,
    attempts::MODULE,
    handlers::MODULE,
    env!("CARGO_CRATE_NAME"),
];
const COMMA: &str = ",";
const INFO: &str = "=info";
const OFF: &str = "off";

pub fn initialize(directives: impl AsRef<str>) -> Result<(), ParseError> {
    let filter = EnvFilter::try_new(directives)?;

    tracing_subscriber::fmt()
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(filter)
        .init();

    Ok(())
}

/// `ORDER_RELAY_LOG` if set, otherwise info for this crate and nothing else.
pub fn filter_from_env() -> String {
    std::env::var(LOG_FILTER_VAR).unwrap_or_else(|_| default_filter())
}

fn default_filter_capacity() -> usize {
    OFF.len().saturating_add(
        TARGETS
            .iter()
            .map(|module| {
                COMMA
                    .len()
                    .saturating_add(module.len())
                    .saturating_add(INFO.len())
            })
            .sum(),
    )
}

pub fn default_filter() -> String {
    let mut filter = String::with_capacity(default_filter_capacity());

    filter.push_str(OFF);

    for target in TARGETS {
        filter.push_str(COMMA);
        filter.push_str(target);
        filter.push_str(INFO);
    }

    filter
}
