//! crocodoc: client for the Crocodoc document conversion and viewing API.
//!
//! ```no_run
//! use crocodoc::{Crocodoc, CrocodocConfig, SessionOptions, SessionUser};
//!
//! # async fn run() -> crocodoc::Result<()> {
//! let client = Crocodoc::new(CrocodocConfig::new("YOUR_API_TOKEN"))?;
//!
//! let uuid = client
//!     .document()
//!     .upload_url("http://www.irs.gov/pub/irs-pdf/fw4.pdf")
//!     .await?;
//!
//! let status = client.document().status(&uuid).await?;
//! if status.is_viewable() {
//!     let options = SessionOptions::editable_by(SessionUser::new(1, "John Crocodile"));
//!     let session = client.session().create(&uuid, &options).await?;
//!     println!("session key: {}", session);
//! }
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod transport;

pub use client::ApiClient;
pub use config::CrocodocConfig;
pub use error::{CrocodocError, HttpErrorKind, RequestContext, Result};
pub use models::{
    DocumentStatus, DownloadOptions, FileUpload, SessionOptions, SessionUser, ThumbnailSize,
    UploadSource, UserFilter,
};
pub use services::{DocumentService, DownloadService, SessionService};
pub use transport::{HttpTransport, ReqwestTransport};

use std::sync::Arc;

/// Entry point holding the configuration and transport.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct Crocodoc {
    api: ApiClient,
}

impl Crocodoc {
    pub fn new(config: CrocodocConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// Build a client from `.env`, `crocodoc.*` and `CROCODOC_*` variables.
    pub fn from_env() -> Result<Self> {
        Self::new(CrocodocConfig::load()?)
    }

    pub fn with_transport(
        config: CrocodocConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        Ok(Self {
            api: ApiClient::with_transport(config, transport)?,
        })
    }

    pub fn config(&self) -> &CrocodocConfig {
        self.api.config()
    }

    pub fn document(&self) -> DocumentService<'_> {
        DocumentService::new(&self.api)
    }

    pub fn download(&self) -> DownloadService<'_> {
        DownloadService::new(&self.api)
    }

    pub fn session(&self) -> SessionService<'_> {
        SessionService::new(&self.api)
    }
}
