//! Common test utilities for workflow integration tests.
#![allow(dead_code)]

use std::time::Duration;
use wiremock::MockServer;
use workflow_tests::WorkflowTestContext;

pub const TEST_TOKEN: &str = "workflow-token";
pub const BASE_PATH: &str = "/api/v2";

/// Poll interval short enough to keep mocked workflows fast.
pub const FAST_POLL: Duration = Duration::from_millis(10);

/// Start a mock API and a context whose client talks to it.
pub async fn setup() -> (MockServer, WorkflowTestContext) {
    let server = MockServer::start().await;
    let ctx = WorkflowTestContext::with_base_url(
        TEST_TOKEN,
        &format!("{}{}", server.uri(), BASE_PATH),
    )
    .expect("Failed to create workflow test context");

    (server, ctx)
}

pub fn api_path(endpoint: &str) -> String {
    format!("{}/{}", BASE_PATH, endpoint)
}

/// Returns true unless a live API token is configured.
pub fn should_skip_live() -> bool {
    std::env::var("CROCODOC_API_TOKEN")
        .map(|token| token.is_empty())
        .unwrap_or(true)
}

/// Skip live tests when no API token is available.
#[macro_export]
macro_rules! skip_without_token {
    () => {
        if common::should_skip_live() {
            eprintln!("Skipping live workflow test (CROCODOC_API_TOKEN is not set)");
            return;
        }
    };
}
