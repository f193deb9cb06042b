//! Group discovery errors.

use std::path::PathBuf;

/// Errors that can occur while walking the input tree for group directories.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("IO error walking {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Nothing to aggregate anywhere under the input root. Fatal: the
    /// combination phase would have no inputs.
    #[error("No group directories found under {}", root.display())]
    EmptyInput { root: PathBuf },
}
