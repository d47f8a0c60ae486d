//! Error types for gateway operations.

use storedesk_core::GatewayError;

use crate::config::ConfigError;

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Gateway client error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Error payload from the backend.
    #[error("API error: {0}")]
    Api(GatewayError),

    /// Response was missing something the protocol requires.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {}", join_messages(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn join_messages(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ConfigError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Error> for GatewayError {
    fn from(error: Error) -> Self {
        match error {
            Error::Api(api) => api,
            Error::Http(e) => {
                let message = e.to_string();
                match e.status() {
                    Some(status) => Self::new(message).with_status(status.as_u16()),
                    None => Self::new(message),
                }
            }
            other => Self::new(other.to_string()),
        }
    }
}
