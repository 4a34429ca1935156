/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for courier-webhook tests

use std::time::Duration;

use courier_webhook::{ClientConfig, Webhook, WebhookClient};
use wiremock::MockServer;

pub const WEBHOOK_PATH: &str = "/api/webhooks/123/token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Webhook pointing at the mock server's execute path
pub fn mock_webhook(server: &MockServer) -> Webhook {
    Webhook::new(&format!("{}{WEBHOOK_PATH}", server.uri())).expect("mock url is valid")
}

/// Client with short timeouts and the given retry budget
pub fn test_client(max_retries: u32) -> WebhookClient {
    WebhookClient::with_config(ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
        max_retries,
        ..ClientConfig::default()
    })
    .expect("client builds")
}

/// Message body returned for `wait=true`
pub fn created_message(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "1100",
        "channel_id": "2200",
        "content": content,
        "webhook_id": "123",
        "flags": 0,
        "embeds": [],
        "attachments": []
    })
}
