//! Tracing setup for hosts that do not install their own subscriber.
//!
//! Filtering follows `RUST_LOG`, e.g. `RUST_LOG=line_marker_host=debug` to see every command
//! invocation and submitted batch.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a console subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_line_number(true))
        .with(filter)
        .try_init();
}
