//! Deterministic artifact names for group and combination tables.

use bioshift_core::constants::COMBO_COUNTER_WIDTH;
use bioshift_core::types::{CategoryTag, TaggedTable};

/// File name for one aggregated group's artifact, e.g. `201_Cell.csv`.
pub fn group_artifact_name(tag: &CategoryTag) -> String {
    format!("{}_{}.csv", tag.node_id, tag.type_name)
}

/// File name for a group whose name fit no category pattern. The full
/// directory name keeps it unambiguous against tagged artifacts.
pub fn untagged_artifact_name(group_name: &str) -> String {
    format!("{group_name}.csv")
}

/// File name for one combination artifact: the zero-padded counter, then
/// each member's abbreviated tag in subset type order, e.g.
/// `001_C201_M10_P305.csv`.
pub fn combo_artifact_name(index: usize, members: &[TaggedTable]) -> String {
    let mut name = format!("{index:0width$}", width = COMBO_COUNTER_WIDTH);
    for member in members {
        name.push('_');
        name.push_str(&member.tag.short_tag());
    }
    name.push_str(".csv");
    name
}
