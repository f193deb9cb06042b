//! TypeIndex: aggregated group tables bucketed by type name.

use std::sync::Arc;

use tracing::warn;

use bioshift_core::types::collections::BTreeMap;
use bioshift_core::types::{GroupTable, TaggedTable};

/// One combination candidate inside a type bucket.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub node_id: String,
    pub table: Arc<GroupTable>,
}

/// Type name → candidate tables, in canonical order.
///
/// Canonical means reproducible across platforms: type names sort
/// lexicographically (BTreeMap key order) and candidates within a bucket
/// sort lexicographically by node id, regardless of the order groups were
/// discovered in. Read-only once built.
#[derive(Debug, Default)]
pub struct TypeIndex {
    by_type: BTreeMap<String, Vec<Candidate>>,
}

impl TypeIndex {
    /// Fold tagged tables into an index and fix the canonical order.
    pub fn build(tables: Vec<TaggedTable>) -> Self {
        let mut by_type: BTreeMap<String, Vec<Candidate>> = BTreeMap::new();
        for tagged in tables {
            by_type
                .entry(tagged.tag.type_name)
                .or_default()
                .push(Candidate {
                    node_id: tagged.tag.node_id,
                    table: tagged.table,
                });
        }
        for (type_name, candidates) in &mut by_type {
            candidates.sort_by(|a, b| a.node_id.cmp(&b.node_id));
            for pair in candidates.windows(2) {
                if pair[0].node_id == pair[1].node_id {
                    warn!("duplicate node {} within type {type_name}", pair[0].node_id);
                }
            }
        }
        Self { by_type }
    }

    /// Number of distinct type names.
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }

    /// Type names in canonical (lexicographic) order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.by_type.keys().map(String::as_str)
    }

    /// Candidates for one type, node-sorted. Empty for unknown types.
    pub fn candidates(&self, type_name: &str) -> &[Candidate] {
        self.by_type.get(type_name).map_or(&[], Vec::as_slice)
    }
}
