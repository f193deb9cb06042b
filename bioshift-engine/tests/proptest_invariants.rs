//! Property-based tests for the engine's algebraic invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - consensus resolution (unanimity preserved, disagreement → neutral)
//!   - merge output = union of inputs, under the same consensus rule
//!   - arity planning bounds
//!   - tuple counts = sum over subsets of per-type candidate products
//!   - counter/name uniqueness and monotonicity

use proptest::prelude::*;

use bioshift_core::types::{CategoryTag, GroupTable, Shift, TaggedTable};
use bioshift_engine::combine::{enumerate_combinations, merge_tables, plan_arity};
use bioshift_engine::index::TypeIndex;
use bioshift_engine::naming::combo_artifact_name;

fn any_shift() -> impl Strategy<Value = Shift> {
    prop_oneof![
        Just(Shift::Decrease),
        Just(Shift::Neutral),
        Just(Shift::Increase)
    ]
}

fn any_table() -> impl Strategy<Value = GroupTable> {
    prop::collection::btree_map("[A-Z]{1,3}", any_shift(), 0..12)
}

proptest! {
    /// Unanimous observations always keep their value.
    #[test]
    fn prop_consensus_preserves_unanimity(shift in any_shift(), n in 1usize..8) {
        let resolved = Shift::consensus(std::iter::repeat(shift).take(n));
        prop_assert_eq!(resolved, Some(shift));
    }

    /// Any two distinct values anywhere in the observation set force neutral.
    #[test]
    fn prop_consensus_collapses_any_disagreement(
        values in prop::collection::vec(any_shift(), 2..8)
    ) {
        let distinct = values.iter().any(|v| *v != values[0]);
        let resolved = Shift::consensus(values.iter().copied());
        if distinct {
            prop_assert_eq!(resolved, Some(Shift::Neutral));
        } else {
            prop_assert_eq!(resolved, Some(values[0]));
        }
    }

    /// Merged output contains exactly the union of input elements.
    #[test]
    fn prop_merge_output_is_union(tables in prop::collection::vec(any_table(), 1..5)) {
        let combined = merge_tables(tables.iter());
        for table in &tables {
            for element in table.keys() {
                prop_assert!(combined.contains_key(element));
            }
        }
        for element in combined.keys() {
            prop_assert!(tables.iter().any(|t| t.contains_key(element)));
        }
    }

    /// An element observed in exactly one table keeps its value verbatim.
    #[test]
    fn prop_merge_single_presence_is_identity(table in any_table()) {
        let empty = GroupTable::new();
        let combined = merge_tables([&table, &empty]);
        prop_assert_eq!(combined, table);
    }

    /// Planned arity is bounded and pinned to the type count.
    #[test]
    fn prop_arity_bounds(type_count in 0usize..100) {
        let arity = plan_arity(type_count);
        prop_assert!((1..=3).contains(&arity));
        prop_assert_eq!(arity == 3, type_count >= 3);
        prop_assert_eq!(arity == 2, type_count == 2);
        prop_assert_eq!(arity == 1, type_count <= 1);
    }
}

/// Index with single-element tables, one bucket per entry of `shape`.
fn index_of(shape: &[usize]) -> TypeIndex {
    let mut tables = Vec::new();
    for (t, count) in shape.iter().enumerate() {
        for node in 0..*count {
            tables.push(TaggedTable::new(
                CategoryTag::new(format!("{node}"), format!("type{t:02}")),
                GroupTable::new(),
            ));
        }
    }
    TypeIndex::build(tables)
}

/// Sum over all size-k index subsets of the product of member counts.
fn expected_tuples(shape: &[usize], k: usize) -> usize {
    fn recurse(shape: &[usize], k: usize, start: usize) -> usize {
        if k == 0 {
            return 1;
        }
        (start..shape.len())
            .map(|i| shape[i] * recurse(shape, k - 1, i + 1))
            .sum()
    }
    recurse(shape, k, 0)
}

proptest! {
    /// Tuple count matches the combinatorial expectation, and counters
    /// run 1..=n with unique names.
    #[test]
    fn prop_tuple_count_and_names(shape in prop::collection::vec(1usize..4, 1..5)) {
        let index = index_of(&shape);
        let arity = plan_arity(index.type_count());
        let combos = enumerate_combinations(&index, arity);

        prop_assert_eq!(combos.len(), expected_tuples(&shape, arity));

        let mut names = Vec::new();
        for (i, combo) in combos.iter().enumerate() {
            prop_assert_eq!(combo.index, i + 1);
            names.push(combo_artifact_name(combo.index, &combo.members));
        }
        let total = names.len();
        names.sort();
        names.dedup();
        prop_assert_eq!(names.len(), total);
    }
}
