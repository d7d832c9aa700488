//! Per-request metrics.
//!
//! Recorded through the `metrics` facade, so they cost nothing until the
//! host application installs a recorder.

use metrics::{counter, histogram};
use std::time::Duration;

pub const REQUESTS_TOTAL: &str = "crocodoc_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "crocodoc_request_duration_seconds";

/// `status` is the HTTP status code, or `error` when no response arrived.
pub fn record_request(
    endpoint: &'static str,
    operation: &'static str,
    status: &str,
    elapsed: Duration,
) {
    let labels = [
        ("endpoint", endpoint.to_string()),
        ("operation", operation.to_string()),
        ("status", status.to_string()),
    ];
    let timing_labels = [
        ("endpoint", endpoint.to_string()),
        ("operation", operation.to_string()),
    ];

    counter!(REQUESTS_TOTAL, &labels).increment(1);
    histogram!(REQUEST_DURATION_SECONDS, &timing_labels).record(elapsed.as_secs_f64());
}
