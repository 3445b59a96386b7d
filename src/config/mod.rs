//! Configuration types for the document-chat client.

use crate::error::{ChatError, ConfigurationError};
use std::time::Duration;
use url::Url;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout (120 seconds; streamed answers can be slow).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the document-chat client.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    /// Base URL of the backend.
    pub base_url: Url,
    /// Default timeout for requests.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
}

impl ChatConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ChatConfigBuilder {
        ChatConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `DOCCHAT_BASE_URL`; everything else uses the defaults. The
    /// backend surface carries no other environment-configurable knobs.
    pub fn from_env() -> Result<Self, ChatError> {
        let base_url =
            std::env::var("DOCCHAT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::builder().base_url(&base_url)?.build()
    }
}

impl Default for ChatConfig {
    #[allow(clippy::unwrap_used)] // DEFAULT_BASE_URL is a valid URL literal
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Builder for [`ChatConfig`].
#[derive(Default)]
pub struct ChatConfigBuilder {
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ChatConfigBuilder {
    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, ChatError> {
        let url = Url::parse(base_url).map_err(|_| ConfigurationError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ChatConfig, ChatError> {
        let defaults = ChatConfig::default();

        Ok(ChatConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::builder().build().unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_custom_config() {
        let config = ChatConfig::builder()
            .base_url("http://rag.internal:9000")
            .unwrap()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "http://rag.internal:9000/");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ChatConfig::builder().base_url("not a url");
        assert!(result.is_err());
    }
}
