//! Discovery data types.

use std::path::PathBuf;

/// One group directory found under the input root.
#[derive(Debug, Clone)]
pub struct GroupDir {
    pub path: PathBuf,
    /// Directory basename, e.g. `group_1_node201_Cell`.
    pub name: String,
    /// Replicate files inside the directory, sorted by file name.
    pub replicates: Vec<PathBuf>,
}
