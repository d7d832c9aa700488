//! HTTP transport abstraction.
//!
//! The client builds an [`ApiRequest`] and hands it to an [`HttpTransport`].
//! [`ReqwestTransport`] is the production implementation and
//! [`MockTransport`] replays scripted responses without a network.

pub mod http;
pub mod mock;

pub use http::ReqwestTransport;
pub use mock::MockTransport;

use crate::models::FileUpload;
use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{0}")]
    Other(String),
}

/// One outgoing call. An empty `form` means GET, anything else a
/// multipart POST.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub url: Url,
    pub form: Vec<FormField>,
}

impl ApiRequest {
    pub fn is_multipart(&self) -> bool {
        !self.form.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: FormValue,
}

#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File(FileUpload),
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, file: FileUpload) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File(file),
        }
    }

    /// Value as recorded in error context; file contents are not copied.
    pub fn summary(&self) -> String {
        match &self.value {
            FormValue::Text(text) => text.clone(),
            FormValue::File(file) => format!("<file {} ({} bytes)>", file.file_name, file.len()),
        }
    }
}

/// A completed HTTP exchange, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}
