//! `reqwest`-backed transport.

use super::{ApiRequest, FormField, FormValue, HttpTransport, RawResponse, TransportError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

const DEFAULT_FILE_MIME: &str = "application/octet-stream";

/// Sends requests with a shared `reqwest::Client`.
///
/// Timeouts, redirects and TLS are whatever the wrapped client does.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let builder = if request.is_multipart() {
            let form = build_form(request.form)?;
            self.client.post(request.url).multipart(form)
        } else {
            self.client.get(request.url)
        };

        let response = builder.send().await.map_err(TransportError::Request)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(Box::new(e)))?;

        Ok(RawResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

fn build_form(fields: Vec<FormField>) -> Result<Form, TransportError> {
    let mut form = Form::new();

    for field in fields {
        form = match field.value {
            FormValue::Text(text) => form.text(field.name, text),
            FormValue::File(file) => {
                let mime = file
                    .mime_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FILE_MIME.to_string());
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&mime)
                    .map_err(TransportError::Request)?;
                form.part(field.name, part)
            }
        };
    }

    Ok(form)
}
