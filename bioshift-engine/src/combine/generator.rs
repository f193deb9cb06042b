//! Combination tuple enumeration.
//!
//! Every size-K subset of types, in lexicographic subset order, crossed
//! with the cartesian product of each member type's candidate list. The
//! full tuple list is produced sequentially so every tuple carries its
//! final counter value before any merging starts; the merge phase can
//! then run in any order without disturbing the naming contract.

use std::sync::Arc;

use bioshift_core::types::{CategoryTag, TaggedTable};

use crate::index::TypeIndex;

/// One planned combination: a fixed 1-based counter value plus its
/// members in subset type order.
#[derive(Debug, Clone)]
pub struct PlannedCombo {
    pub index: usize,
    pub members: Vec<TaggedTable>,
}

/// Enumerate every combination at the given arity.
///
/// Counter values are global across subsets, 1-based, and strictly
/// increasing in production order. Within one subset the leftmost type's
/// candidate varies slowest and the rightmost fastest.
pub fn enumerate_combinations(index: &TypeIndex, arity: usize) -> Vec<PlannedCombo> {
    let types: Vec<&str> = index.types().collect();
    let mut combos = Vec::new();
    let mut counter = 0usize;

    for subset in k_subsets(types.len(), arity) {
        let buckets: Vec<_> = subset
            .iter()
            .map(|&t| (types[t], index.candidates(types[t])))
            .collect();
        let lens: Vec<usize> = buckets.iter().map(|(_, c)| c.len()).collect();
        if lens.iter().any(|&len| len == 0) {
            continue;
        }

        let mut pos = vec![0usize; buckets.len()];
        loop {
            counter += 1;
            let members = buckets
                .iter()
                .zip(&pos)
                .map(|((type_name, candidates), &i)| {
                    let candidate = &candidates[i];
                    TaggedTable {
                        tag: CategoryTag::new(candidate.node_id.clone(), *type_name),
                        table: Arc::clone(&candidate.table),
                    }
                })
                .collect();
            combos.push(PlannedCombo {
                index: counter,
                members,
            });
            if !advance(&mut pos, &lens) {
                break;
            }
        }
    }

    combos
}

/// All size-k index subsets of `0..count` in lexicographic order.
fn k_subsets(count: usize, k: usize) -> Vec<Vec<usize>> {
    let mut subsets = Vec::new();
    if k == 0 || k > count {
        return subsets;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        subsets.push(idx.clone());
        // Rightmost position that can still move up.
        let Some(i) = (0..k).rev().find(|&i| idx[i] < i + count - k) else {
            return subsets;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Odometer step over the candidate lists, rightmost digit fastest.
/// Returns false once every tuple has been produced.
fn advance(pos: &mut [usize], lens: &[usize]) -> bool {
    for i in (0..pos.len()).rev() {
        pos[i] += 1;
        if pos[i] < lens[i] {
            return true;
        }
        pos[i] = 0;
    }
    false
}
