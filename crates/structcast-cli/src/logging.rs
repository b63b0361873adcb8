//! Development-time tracing for the CLI.
//!
//! Reads `RUST_LOG`, defaults to `warn`. Output goes to stderr so it never
//! mixes with the rendered report on stdout. Dropped-field diagnostics from
//! the engine show up at `structcast_engine=debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
