//! Top-level pipeline error.

use std::path::PathBuf;

use super::config_error::ConfigError;
use super::discover_error::DiscoverError;
use super::table_error::TableError;

/// Fatal conditions that terminate a run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discover(#[from] DiscoverError),

    /// Artifact write failure. Partial outputs are never reported as success.
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to create output root {}: {source}", path.display())]
    CreateOutputRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised after the combination phase when one or more tuples failed
    /// to persist. Siblings were still completed first.
    #[error("{failed} of {total} combinations failed to persist")]
    CombinationFailures { failed: usize, total: usize },
}
