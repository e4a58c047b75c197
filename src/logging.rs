//! Tracing setup for the `sitectl` binary
//!
//! Diagnostics go to stderr so report output on stdout stays pipeable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the filter directive: `RUST_LOG` wins over the configured level
pub fn filter_directive(configured: &str) -> String {
    match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => configured.to_string(),
    }
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(configured_level: &str) {
    let directive = filter_directive(configured_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
