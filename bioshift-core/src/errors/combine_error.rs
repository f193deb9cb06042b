//! Per-tuple combination failures.

use super::table_error::TableError;

/// One combination tuple that failed to persist. Sibling tuples keep
/// running; the pipeline reports the failures once the phase completes.
#[derive(Debug, thiserror::Error)]
#[error("Combination {name}: {source}")]
pub struct CombineError {
    pub name: String,
    #[source]
    pub source: TableError,
}
