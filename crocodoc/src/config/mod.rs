//! Client configuration.
//!
//! Holds the API token and the endpoint the client talks to. Values come
//! from `.env`, an optional `crocodoc.{toml,yaml,json}` file and
//! `CROCODOC_*` environment variables, or are set programmatically when
//! pointing the client at an alternate endpoint.

use crate::error::CrocodocError;
use config::{Config as Cfg, Environment, File};
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_HOST: &str = "crocodoc.com";
pub const DEFAULT_BASE_PATH: &str = "/api/v2";

#[derive(Debug, Clone, Deserialize)]
pub struct CrocodocConfig {
    pub api_token: Secret<String>,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

impl CrocodocConfig {
    /// Configuration for the public API with the given token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: Secret::new(api_token.into()),
            protocol: default_protocol(),
            host: default_host(),
            base_path: default_base_path(),
        }
    }

    pub fn load() -> Result<Self, CrocodocError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("crocodoc").required(false))
            .add_source(
                Environment::with_prefix("CROCODOC")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn with_endpoint(
        mut self,
        protocol: impl Into<String>,
        host: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        self.protocol = protocol.into();
        self.host = host.into();
        self.base_path = base_path.into();
        self
    }

    /// Point the client at `base_url`, e.g. `http://127.0.0.1:8080/api/v2`.
    pub fn with_base_url(self, base_url: &str) -> Result<Self, CrocodocError> {
        let url = Url::parse(base_url).map_err(|e| {
            CrocodocError::Configuration(format!("invalid base url '{}': {}", base_url, e))
        })?;

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(CrocodocError::Configuration(format!(
                    "base url '{}' has no host",
                    base_url
                )))
            }
        };

        let protocol = url.scheme().to_string();
        let base_path = url.path().to_string();
        Ok(self.with_endpoint(protocol, host, base_path))
    }

    pub fn validate(&self) -> Result<(), CrocodocError> {
        if self.api_token.expose_secret().trim().is_empty() {
            return Err(CrocodocError::Configuration(
                "api_token is required but not set".to_string(),
            ));
        }
        if self.protocol.is_empty() {
            return Err(CrocodocError::Configuration(
                "protocol must not be empty".to_string(),
            ));
        }
        if self.host.is_empty() {
            return Err(CrocodocError::Configuration(
                "host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Root of the API, e.g. `https://crocodoc.com/api/v2/`.
    ///
    /// Always ends with a slash so endpoint paths can be joined onto it.
    pub fn api_root(&self) -> Result<Url, CrocodocError> {
        let base_path = self.base_path.trim_matches('/');
        let root = if base_path.is_empty() {
            format!("{}://{}/", self.protocol, self.host)
        } else {
            format!("{}://{}/{}/", self.protocol, self.host, base_path)
        };

        Url::parse(&root).map_err(|e| {
            CrocodocError::Configuration(format!("invalid endpoint '{}': {}", root, e))
        })
    }
}
