//! Outer-join merge of a combination tuple's tables.

use bioshift_core::types::collections::{BTreeMap, SmallVec4};
use bioshift_core::types::{CombinedTable, GroupTable, Shift};

/// Merge the tables of one combination tuple.
///
/// The output element set is the union of the inputs'. Per element, only
/// the tables that contain it contribute a value (absence is not an
/// observation), and the values resolve under the same consensus rule as
/// replicate aggregation: identical keeps the value, disagreement
/// collapses to neutral.
pub fn merge_tables<'a, I>(tables: I) -> CombinedTable
where
    I: IntoIterator<Item = &'a GroupTable>,
{
    let mut observed: BTreeMap<&str, SmallVec4<Shift>> = BTreeMap::new();
    for table in tables {
        for (element, shift) in table {
            observed.entry(element.as_str()).or_default().push(*shift);
        }
    }

    observed
        .into_iter()
        .filter_map(|(element, values)| {
            Shift::consensus(values.iter().copied()).map(|shift| (element.to_string(), shift))
        })
        .collect()
}
