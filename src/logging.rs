//! Logging Module
//! Sets up the tracing subscriber for console output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging, filtered by `RUST_LOG` when set.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wranglify=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
}
