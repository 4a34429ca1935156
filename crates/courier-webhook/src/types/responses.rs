/*
[INPUT]:  Execute-webhook response bodies
[OUTPUT]: Typed created-message, error and rate-limit bodies
[POS]:    Data layer - type definitions for endpoint responses
[UPDATE]: When response schema changes
*/

use serde::{Deserialize, Serialize};

use super::embed::Embed;
use super::flags::MessageFlags;

/// Message returned when executing with `wait=true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub webhook_id: Option<String>,
    #[serde(default)]
    pub flags: MessageFlags,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default)]
    pub attachments: Vec<MessageAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageAttachment {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Error body returned with 4xx responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

/// Body of a 429 response; `retry_after` is in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateLimitBody {
    #[serde(default)]
    pub message: String,
    pub retry_after: f64,
    #[serde(default)]
    pub global: bool,
}
