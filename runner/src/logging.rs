//! Development-time tracing for the hosted runner.
//!
//! Diagnostics go to stderr only. Stdout is reserved for the harness
//! transcript, which must stay byte-identical across runs.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from config) applies.
///
/// # Example
/// ```bash
/// RUST_LOG=runner=debug cargo run -p runner -- run
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call in the same process is a no-op.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
