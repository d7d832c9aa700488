#![allow(dead_code)]

use crocodoc::{Crocodoc, CrocodocConfig};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-api-token";
pub const BASE_PATH: &str = "/api/v2";

pub struct TestApp {
    pub server: MockServer,
    pub client: Crocodoc,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;

        let config = CrocodocConfig::new(TEST_TOKEN)
            .with_base_url(&format!("{}{}", server.uri(), BASE_PATH))
            .expect("Failed to build test configuration");
        let client = Crocodoc::new(config).expect("Failed to build client");

        Self { server, client }
    }

    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is enabled by default")
    }
}

pub fn api_path(endpoint: &str) -> String {
    format!("{}/{}", BASE_PATH, endpoint)
}

/// Value of a query parameter on a recorded request.
pub fn query_value(request: &wiremock::Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Value of a text field in a recorded multipart body.
///
/// Good enough for the small ASCII bodies the tests send.
pub fn form_value(request: &wiremock::Request, name: &str) -> Option<String> {
    let body = String::from_utf8_lossy(&request.body);
    let marker = format!("name=\"{}\"", name);
    let start = body.find(&marker)?;
    let rest = &body[start..];
    let value_start = rest.find("\r\n\r\n")? + 4;
    let value = &rest[value_start..];
    let value_end = value.find("\r\n--")?;
    Some(value[..value_end].to_string())
}

pub fn has_form_field(request: &wiremock::Request, name: &str) -> bool {
    String::from_utf8_lossy(&request.body).contains(&format!("name=\"{}\"", name))
}
