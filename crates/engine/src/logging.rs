//! Tracing setup for native host embeddings and tests.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to info-level
/// engine output. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "summoner_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
