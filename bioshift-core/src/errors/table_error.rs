//! Errors reading and writing two-column shift tables.
//!
//! Whether a `TableError` is fatal depends on the caller: a replicate
//! read failure is a per-file rejection, an artifact write failure kills
//! the run.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} has no header row", path.display())]
    Empty { path: PathBuf },

    #[error("Missing required column {column:?} in {}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}
