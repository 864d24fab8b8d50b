//! Shared helpers for integration tests against a mock Jira server.

#![allow(dead_code)]

use jira_servicedesk::{Config, JiraServiceDesk};
use wiremock::MockServer;

pub const USERNAME: &str = "agent";
pub const PASSWORD: &str = "s3cret-token";

/// Absolute mock-server path for an API-relative path.
pub fn api(path: &str) -> String {
    format!("/rest/servicedeskapi/{}", path)
}

/// Config pointing at the mock server.
pub fn config_for(server: &MockServer) -> Config {
    Config::new(server.uri(), USERNAME, PASSWORD).expect("valid test config")
}

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, JiraServiceDesk) {
    let server = MockServer::start().await;
    let client = JiraServiceDesk::new(&config_for(&server)).expect("client builds");
    (server, client)
}

/// Requests the mock server has seen so far.
pub async fn received(server: &MockServer) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}
