use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based
/// filtering.
///
/// Call once from the embedding harness before the first trigger
/// invocation. Filtering follows the usual `RUST_LOG` conventions and
/// defaults to "info"; event fields are flattened for cleaner output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}
