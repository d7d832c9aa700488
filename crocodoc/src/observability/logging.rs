use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a JSON `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `log_level`.
///
/// Libraries should not own the global subscriber, so this is opt-in for
/// binaries and test harnesses. Does nothing if a subscriber is already set.
pub fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init();
}
