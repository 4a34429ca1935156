/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared fixtures for courier-cli tests
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

use courier_cli::{ClientSettings, CourierConfig};
use wiremock::MockServer;

pub const WEBHOOK_PATH: &str = "/api/webhooks/9/token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at the mock server, without retries
pub fn mock_config(server: &MockServer) -> CourierConfig {
    CourierConfig {
        webhook_url: Some(format!("{}{WEBHOOK_PATH}", server.uri())),
        client: ClientSettings {
            timeout_secs: 5,
            connect_timeout_secs: 2,
            max_retries: 0,
        },
        ..CourierConfig::default()
    }
}
