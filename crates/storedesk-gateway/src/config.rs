//! Gateway connection configuration and validation.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Validation error for gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API URL is empty.
    EmptyUrl,
    /// API URL is not a valid http(s) URL.
    InvalidUrl,
    /// API key is empty.
    EmptyApiKey,
}

impl ConfigError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyUrl => "API URL is required",
            Self::InvalidUrl => "API URL must be an http or https URL",
            Self::EmptyApiKey => "API key is required",
        }
    }

    /// Get the settings key this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyUrl | Self::InvalidUrl => "api_url",
            Self::EmptyApiKey => "api_key",
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConfigError {}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Project base URL, e.g. `https://xyz.example.co`.
    pub api_url: Url,
    /// Publishable API key sent with every request.
    pub api_key: String,
    /// Signed-in user's access token. Falls back to the API key when absent.
    pub access_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Validate raw settings and build a config.
    ///
    /// Reports every problem at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] listing all invalid fields.
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        let mut errors = Vec::new();

        let url = if api_url.trim().is_empty() {
            errors.push(ConfigError::EmptyUrl);
            None
        } else {
            match Url::parse(api_url.trim()) {
                Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Some(url),
                _ => {
                    errors.push(ConfigError::InvalidUrl);
                    None
                }
            }
        };

        if api_key.trim().is_empty() {
            errors.push(ConfigError::EmptyApiKey);
        }

        match url {
            Some(api_url) if errors.is_empty() => Ok(Self {
                api_url,
                api_key: api_key.trim().to_string(),
                access_token: None,
                timeout: DEFAULT_TIMEOUT,
            }),
            _ => Err(Error::InvalidConfig(errors)),
        }
    }

    /// Sets the access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Token for the `Authorization` header.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.api_key)
    }

    /// URL of a table endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn table_url(&self, table: &str) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidConfig(vec![ConfigError::InvalidUrl]))?
            .pop_if_empty()
            .extend(["rest", "v1", table]);
        Ok(url)
    }
}
