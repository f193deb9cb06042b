//! Observability setup.
//! `tracing` crate with `EnvFilter`, configured through `BIOSHIFT_LOG`.

pub mod setup;

pub use setup::init_tracing;
