#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid relay configuration: {0}")]
    Config(String),
    #[error("invalid request header: {0}")]
    Header(&'static str),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to serialize order payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Orders(#[from] crate::orders::StoreError),
    #[error(transparent)]
    Attempts(#[from] crate::attempts::StoreError),
}
