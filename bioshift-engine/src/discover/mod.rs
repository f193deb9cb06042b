//! Group discovery: walk the input tree for group directories and list
//! their replicate files.

pub mod types;

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, warn};

use bioshift_core::config::EngineConfig;
use bioshift_core::constants::GROUP_DIR_PREFIX;
use bioshift_core::errors::DiscoverError;

pub use types::GroupDir;

/// Find every group directory under the configured input root.
///
/// A group is any directory whose basename starts with `group_`
/// (case-insensitive), at any depth. Results are sorted by path and each
/// group's replicate list is sorted by file name, so downstream
/// enumeration and naming never depend on filesystem traversal order.
///
/// Zero groups is fatal: there is nothing to aggregate or combine.
pub fn discover_groups(config: &EngineConfig) -> Result<Vec<GroupDir>, DiscoverError> {
    let root = &config.input_root;

    // Surface an unreadable root as a walk error instead of an empty scan.
    fs::read_dir(root).map_err(|source| DiscoverError::Walk {
        path: root.clone(),
        source,
    })?;

    let mut groups = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("walk error under {}: {e}", root.display());
                continue;
            }
        };
        // Depth 0 is the root itself; only directories inside it can be groups.
        if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !is_group_dir_name(&name) {
            continue;
        }
        let replicates = list_replicates(entry.path(), config);
        groups.push(GroupDir {
            path: entry.path().to_path_buf(),
            name: name.into_owned(),
            replicates,
        });
    }

    if groups.is_empty() {
        return Err(DiscoverError::EmptyInput { root: root.clone() });
    }

    groups.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("discovered {} group directories", groups.len());
    Ok(groups)
}

fn is_group_dir_name(name: &str) -> bool {
    let prefix = GROUP_DIR_PREFIX.as_bytes();
    name.len() >= prefix.len() && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Replicate files of one group: regular files matching the configured
/// prefix and extension, sorted by name. An unreadable group directory
/// yields an empty list (the aggregator then skips the group).
fn list_replicates(dir: &Path, config: &EngineConfig) -> Vec<std::path::PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot list group directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let prefix = config.effective_replicate_prefix();
    let extension = config.effective_replicate_extension();
    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix) && n.ends_with(extension))
        })
        .collect();
    files.sort();
    files
}
