//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the BioShift tracing/logging system.
///
/// Reads the `BIOSHIFT_LOG` environment variable for per-subsystem log
/// levels (e.g. `BIOSHIFT_LOG=bioshift_engine::aggregate=debug`), falling
/// back to `bioshift=info`. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("BIOSHIFT_LOG").unwrap_or_else(|_| EnvFilter::new("bioshift=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
