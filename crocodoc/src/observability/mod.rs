pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::{record_request, REQUESTS_TOTAL, REQUEST_DURATION_SECONDS};
