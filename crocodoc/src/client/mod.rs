//! Request builder shared by every endpoint group.
//!
//! Builds `protocol://host/base-path/<endpoint>/<operation>`, attaches the
//! API token (query string for GET, form field for POST), sends the call
//! through the configured [`HttpTransport`] and classifies the result.

mod response;

use crate::config::CrocodocConfig;
use crate::error::{CrocodocError, RequestContext, Result};
use crate::observability::record_request;
use crate::transport::{
    ApiRequest, FormField, HttpTransport, RawResponse, ReqwestTransport, TransportError,
};
use reqwest::Url;
use secrecy::ExposeSecret;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

const TOKEN_PARAM: &str = "token";

pub type QueryParams = Vec<(&'static str, String)>;

#[derive(Clone)]
pub struct ApiClient {
    config: Arc<CrocodocConfig>,
    api_root: Url,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: CrocodocConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(
        config: CrocodocConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        config.validate()?;
        let api_root = config.api_root()?;

        Ok(Self {
            config: Arc::new(config),
            api_root,
            transport,
        })
    }

    pub fn config(&self) -> &CrocodocConfig {
        &self.config
    }

    pub fn operation_url(&self, endpoint: &str, operation: &str) -> Result<Url> {
        self.api_root
            .join(&format!("{}/{}", endpoint, operation))
            .map_err(|e| {
                CrocodocError::Configuration(format!(
                    "cannot build url for {}/{}: {}",
                    endpoint, operation, e
                ))
            })
    }

    /// Send a request and return the body untouched.
    pub async fn request_bytes(
        &self,
        endpoint: &'static str,
        operation: &'static str,
        query: QueryParams,
        form: Vec<FormField>,
    ) -> Result<Vec<u8>> {
        let (response, _) = self.dispatch(endpoint, operation, query, form).await?;
        Ok(response.body)
    }

    /// Send a request and decode the body as JSON.
    pub async fn request_json(
        &self,
        endpoint: &'static str,
        operation: &'static str,
        query: QueryParams,
        form: Vec<FormField>,
    ) -> Result<Value> {
        let (response, context) = self.dispatch(endpoint, operation, query, form).await?;
        response::decode_json(&response.body, &context)
    }

    async fn dispatch(
        &self,
        endpoint: &'static str,
        operation: &'static str,
        query: QueryParams,
        mut form: Vec<FormField>,
    ) -> Result<(RawResponse, RequestContext)> {
        let mut url = self.operation_url(endpoint, operation)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }

        // Captured before the token is attached.
        let context = RequestContext {
            endpoint,
            operation,
            url: url.to_string(),
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            form: form
                .iter()
                .map(|field| (field.name.clone(), field.summary()))
                .collect(),
        };

        let token = self.config.api_token.expose_secret();
        if form.is_empty() {
            url.query_pairs_mut().append_pair(TOKEN_PARAM, token);
        } else {
            form.push(FormField::text(TOKEN_PARAM, token.as_str()));
        }

        tracing::debug!(
            endpoint,
            operation,
            url = %context.url,
            multipart = !form.is_empty(),
            "Sending Crocodoc request"
        );

        let started = Instant::now();
        let result = self.transport.execute(ApiRequest { url, form }).await;
        let elapsed = started.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(source) => {
                record_request(endpoint, operation, "error", elapsed);
                tracing::warn!(
                    endpoint,
                    operation,
                    error = %source,
                    "Crocodoc request failed"
                );

                return Err(if matches!(source, TransportError::Body(_)) {
                    CrocodocError::InvalidResponse { context, source }
                } else {
                    CrocodocError::Connection { context, source }
                });
            }
        };

        record_request(endpoint, operation, &response.status.to_string(), elapsed);
        tracing::debug!(
            endpoint,
            operation,
            status = response.status,
            bytes = response.body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Crocodoc response received"
        );

        response::check_status(response.status, &context)?;

        Ok((response, context))
    }
}
