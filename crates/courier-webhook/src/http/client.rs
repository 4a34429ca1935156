/*
[INPUT]:  HTTP configuration (timeouts, retries, user agent)
[OUTPUT]: Configured reqwest client ready for webhook calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, RequestBuilder, Url};
use std::time::Duration;

use super::Result;

const DEFAULT_USER_AGENT: &str = concat!("courier-webhook/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Retries after a 429 before giving up
    pub max_retries: u32,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_retries: 3,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for executing webhooks
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http_client: Client,
    config: ClientConfig,
}

impl WebhookClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a POST request builder for an execute URL
    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http_client.post(url)
    }
}
