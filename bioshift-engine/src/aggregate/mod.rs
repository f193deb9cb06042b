//! Group aggregation: pool every replicate observation in a group and
//! resolve each element with the consensus rule.

pub mod tag;

use tracing::{info, warn};

use bioshift_core::events::types::FileRejectedEvent;
use bioshift_core::events::ShiftEventHandler;
use bioshift_core::types::collections::{FxHashMap, SmallVec4};
use bioshift_core::types::{GroupTable, Shift};

use crate::discover::GroupDir;
use crate::table_io::read_replicate;

pub use tag::parse_tag;

/// Outcome of aggregating one group. File rejections are counted even
/// when the group ends up producing no table.
#[derive(Debug)]
pub struct GroupMerge {
    /// The resolved table, or `None` when not a single replicate file
    /// was usable.
    pub table: Option<GroupTable>,
    /// Replicate files that contributed rows.
    pub files_used: usize,
    /// Replicate files rejected as unreadable or missing a required column.
    pub files_rejected: usize,
    pub rows_skipped: usize,
}

/// Merge one group's replicate files into a single resolved table.
///
/// Rejected files are warnings, not errors; sibling files still count.
/// Per element, identical observations keep their value and any
/// disagreement collapses to neutral. Observations are pooled across
/// files, so a conflict within one file collapses the same way as a
/// conflict between files.
pub fn merge_group(group: &GroupDir, handler: &dyn ShiftEventHandler) -> GroupMerge {
    let mut observed: FxHashMap<String, SmallVec4<Shift>> = FxHashMap::default();
    let mut files_used = 0usize;
    let mut files_rejected = 0usize;
    let mut rows_skipped = 0usize;

    for path in &group.replicates {
        match read_replicate(path) {
            Ok(replicate) => {
                files_used += 1;
                rows_skipped += replicate.rows_skipped;
                for (element, shift) in replicate.records {
                    observed.entry(element).or_default().push(shift);
                }
            }
            Err(e) => {
                files_rejected += 1;
                warn!("rejecting replicate in {}: {e}", group.name);
                handler.on_file_rejected(&FileRejectedEvent {
                    group: group.name.clone(),
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let table = if files_used == 0 {
        info!("no valid replicate files in {}", group.name);
        None
    } else {
        Some(
            observed
                .into_iter()
                .filter_map(|(element, values)| {
                    Shift::consensus(values.iter().copied()).map(|shift| (element, shift))
                })
                .collect(),
        )
    };

    GroupMerge {
        table,
        files_used,
        files_rejected,
        rows_skipped,
    }
}
