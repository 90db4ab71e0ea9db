//! Tracing setup for the CLI. Library crates only emit events.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the level is `warn`, or `info` when `verbose` is set.
pub fn init(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
