//! Group and combination tables, and the category tag carried with them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::collections::BTreeMap;
use super::Shift;

/// Element → resolved shift for one aggregated group.
///
/// BTreeMap so artifact rows come out in a stable element order.
pub type GroupTable = BTreeMap<String, Shift>;

/// Element → resolved shift for one combination tuple.
pub type CombinedTable = BTreeMap<String, Shift>;

/// Structured (node, type) classification of a group.
///
/// Parsed once from the group directory name and carried alongside the
/// table; artifact filenames are a serialization of this tag, never a
/// source to re-derive it from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryTag {
    pub node_id: String,
    pub type_name: String,
}

impl CategoryTag {
    pub fn new(node_id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            type_name: type_name.into(),
        }
    }

    /// Abbreviated form used in combination artifact names: first letter
    /// of the type name, uppercased, then the node id (e.g. `C201`).
    pub fn short_tag(&self) -> String {
        let initial = self
            .type_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('T');
        format!("{initial}{}", self.node_id)
    }
}

/// An aggregated group table together with its category tag.
///
/// The table is shared immutably; the combination phase only reads it.
#[derive(Debug, Clone)]
pub struct TaggedTable {
    pub tag: CategoryTag,
    pub table: Arc<GroupTable>,
}

impl TaggedTable {
    pub fn new(tag: CategoryTag, table: GroupTable) -> Self {
        Self {
            tag,
            table: Arc::new(table),
        }
    }
}
