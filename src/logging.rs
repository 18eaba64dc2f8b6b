//! Logging bootstrap
//!
//! `RUST_LOG` overrides the default filter. Initializing twice is harmless.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "portfolio_studio=info";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        eprintln!("⚠️  Logging already initialized: {}", err);
    }
}
