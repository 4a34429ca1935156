/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed sender configuration and HTTP client settings
[POS]:    Configuration layer - defaults for the send command
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use courier_webhook::ClientConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the sender; every field may be overridden by flags
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CourierConfig {
    /// Execute URL of the webhook
    pub webhook_url: Option<String>,
    /// Display name override
    pub username: Option<String>,
    /// Avatar override (http/https)
    pub avatar_url: Option<String>,
    /// Existing thread to post into
    pub thread_id: Option<String>,
    /// Wait for the created message
    pub wait: bool,
    /// HTTP client settings
    pub client: ClientSettings,
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSettings {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Retries after a rate-limited response
    pub max_retries: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_retries: 3,
        }
    }
}

impl CourierConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.client.timeout_secs),
            connect_timeout: Duration::from_secs(self.client.connect_timeout_secs),
            max_retries: self.client.max_retries,
            ..ClientConfig::default()
        }
    }
}
