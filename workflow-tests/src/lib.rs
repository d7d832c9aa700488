//! Document lifecycle workflow tests.
//!
//! Drives a Crocodoc client through upload, conversion polling, download,
//! session creation and deletion. The tests under `tests/` run against a
//! local mock server; the live smoke test is ignored unless asked for.
//!
//! ## Usage
//!
//! ```bash
//! # Mocked workflows
//! cargo test -p workflow-tests
//!
//! # Against the real API
//! CROCODOC_API_TOKEN=... cargo test -p workflow-tests -- --ignored
//! ```

use anyhow::{anyhow, Result};
use crocodoc::{Crocodoc, CrocodocConfig, DocumentStatus};
use std::sync::Once;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Public sample document used by the live smoke test.
pub const SAMPLE_DOCUMENT_URL: &str = "http://www.irs.gov/pub/irs-pdf/fw4.pdf";

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,crocodoc=debug,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Settings for workflows run against the live API.
#[derive(Debug, Clone)]
pub struct LiveSettings {
    pub document_url: String,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl LiveSettings {
    /// Load settings from environment variables or use defaults.
    pub fn from_env() -> Self {
        let seconds = |name: &str, default: u64| {
            std::env::var(name)
                .ok()
                .and_then(|value| value.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(default))
        };

        Self {
            document_url: std::env::var("CROCODOC_SAMPLE_URL")
                .unwrap_or_else(|_| SAMPLE_DOCUMENT_URL.to_string()),
            poll_interval: seconds("CROCODOC_POLL_INTERVAL_SECS", 2),
            timeout: seconds("CROCODOC_CONVERSION_TIMEOUT_SECS", 120),
        }
    }
}

/// Context for one workflow run.
pub struct WorkflowTestContext {
    /// Tags log output for this run.
    pub run_id: Uuid,
    pub client: Crocodoc,
}

impl WorkflowTestContext {
    /// Context for a client pointed at `base_url` (a mock server).
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        init_tracing();

        let config = CrocodocConfig::new(token).with_base_url(base_url)?;
        Ok(Self {
            run_id: Uuid::new_v4(),
            client: Crocodoc::new(config)?,
        })
    }

    /// Context for the real API, configured from `CROCODOC_*` variables.
    pub fn from_env() -> Result<Self> {
        init_tracing();

        let client =
            Crocodoc::from_env().map_err(|e| anyhow!("Failed to configure client: {}", e))?;
        Ok(Self {
            run_id: Uuid::new_v4(),
            client,
        })
    }
}

/// Poll `document/status` until the document is viewable.
///
/// Fails as soon as the server reports a conversion error, or when
/// `timeout` elapses first.
pub async fn wait_until_viewable(
    client: &Crocodoc,
    uuid: &str,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<DocumentStatus> {
    let start = Instant::now();

    loop {
        let status = client.document().status(uuid).await?;

        if status.is_error() {
            return Err(anyhow!(
                "Conversion of {} failed: {}",
                uuid,
                status.error.as_deref().unwrap_or("unknown error")
            ));
        }

        if status.is_viewable() {
            tracing::info!(uuid = %uuid, status = ?status.status, "Document is viewable");
            return Ok(status);
        }

        if start.elapsed() > timeout {
            return Err(anyhow!(
                "Timeout waiting for {} to become viewable (last status: {})",
                uuid,
                status.status.as_deref().unwrap_or("none")
            ));
        }

        tracing::debug!(uuid = %uuid, status = ?status.status, "Waiting for conversion");
        tokio::time::sleep(poll_interval).await;
    }
}
