//! Tracing setup for the serverless functions.
//!
//! Reads `RUST_LOG` for the filter (default `info`). Output goes to stderr
//! without ANSI colors so the platform's log viewer shows plain lines.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_FILTER: &str = "info,hyper_util=off,rustls=off";

/// Install the global subscriber. Calling it again is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter);

    // A warm instance or a test binary may already have a subscriber.
    tracing_subscriber::registry().with(layer).try_init().ok();
}
