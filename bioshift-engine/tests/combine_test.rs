//! Combination tests: arity planning, tuple enumeration, counter
//! assignment, and naming.

use bioshift_core::types::{CategoryTag, GroupTable, Shift, TaggedTable};
use bioshift_engine::combine::{enumerate_combinations, plan_arity};
use bioshift_engine::index::TypeIndex;
use bioshift_engine::naming::combo_artifact_name;

// ---- Helpers ----

fn tagged(node: &str, type_name: &str) -> TaggedTable {
    let mut table = GroupTable::new();
    table.insert(format!("marker_{node}"), Shift::Increase);
    TaggedTable::new(CategoryTag::new(node, type_name), table)
}

/// Index with the given (type, candidate count) shape.
fn index_of(shape: &[(&str, usize)]) -> TypeIndex {
    let mut tables = Vec::new();
    for (type_name, count) in shape {
        for node in 0..*count {
            tables.push(tagged(&format!("{node}"), type_name));
        }
    }
    TypeIndex::build(tables)
}

// ---- Planner ----

#[test]
fn arity_is_three_for_three_or_more_types() {
    assert_eq!(plan_arity(3), 3);
    assert_eq!(plan_arity(7), 3);
    assert_eq!(plan_arity(2), 2);
    assert_eq!(plan_arity(1), 1);
    assert_eq!(plan_arity(0), 1);
}

// ---- Enumeration ----

#[test]
fn single_candidate_per_type_yields_exactly_one_tuple() {
    let index = TypeIndex::build(vec![
        tagged("201", "Cell"),
        tagged("10", "Microbe"),
        tagged("305", "Protein"),
    ]);
    assert_eq!(index.type_count(), 3);

    let combos = enumerate_combinations(&index, plan_arity(index.type_count()));
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].index, 1);
    assert_eq!(
        combo_artifact_name(combos[0].index, &combos[0].members),
        "001_C201_M10_P305.csv"
    );
}

#[test]
fn tuple_count_is_sum_of_per_subset_products() {
    // Types: A×2, B×3, C×1, D×2 at arity 3:
    // ABC 6 + ABD 12 + ACD 4 + BCD 6 = 28.
    let index = index_of(&[("A", 2), ("B", 3), ("C", 1), ("D", 2)]);
    let combos = enumerate_combinations(&index, 3);
    assert_eq!(combos.len(), 28);

    // Counter is global, 1-based, strictly increasing in production order.
    let indices: Vec<_> = combos.iter().map(|c| c.index).collect();
    assert_eq!(indices, (1..=28).collect::<Vec<_>>());
}

#[test]
fn two_types_enumerate_pairs_only() {
    let index = index_of(&[("Cell", 2), ("Microbe", 2)]);
    let combos = enumerate_combinations(&index, plan_arity(index.type_count()));
    assert_eq!(combos.len(), 4);
    for combo in &combos {
        assert_eq!(combo.members.len(), 2);
        assert_eq!(combo.members[0].tag.type_name, "Cell");
        assert_eq!(combo.members[1].tag.type_name, "Microbe");
    }
}

#[test]
fn leftmost_type_varies_slowest() {
    let index = index_of(&[("A", 2), ("B", 2)]);
    let combos = enumerate_combinations(&index, 2);
    let picks: Vec<(String, String)> = combos
        .iter()
        .map(|c| {
            (
                c.members[0].tag.node_id.clone(),
                c.members[1].tag.node_id.clone(),
            )
        })
        .collect();
    assert_eq!(
        picks,
        [
            ("0".to_string(), "0".to_string()),
            ("0".to_string(), "1".to_string()),
            ("1".to_string(), "0".to_string()),
            ("1".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn subsets_follow_sorted_type_order() {
    let index = index_of(&[("Microbe", 1), ("Cell", 1), ("Protein", 1), ("Antibody", 1)]);
    let combos = enumerate_combinations(&index, 3);
    // C(4,3) = 4 subsets, one tuple each, in lexicographic type order.
    let names: Vec<_> = combos
        .iter()
        .map(|c| combo_artifact_name(c.index, &c.members))
        .collect();
    assert_eq!(
        names,
        [
            "001_A0_C0_M0.csv",
            "002_A0_C0_P0.csv",
            "003_A0_M0_P0.csv",
            "004_C0_M0_P0.csv",
        ]
    );
}

#[test]
fn names_are_unique_within_a_run() {
    let index = index_of(&[("A", 3), ("B", 2), ("C", 2)]);
    let combos = enumerate_combinations(&index, 3);
    let mut names: Vec<_> = combos
        .iter()
        .map(|c| combo_artifact_name(c.index, &c.members))
        .collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn fewer_types_than_max_arity_still_enumerates_at_reduced_arity() {
    let index = index_of(&[("Cell", 3)]);
    let combos = enumerate_combinations(&index, plan_arity(index.type_count()));
    assert_eq!(combos.len(), 3);
    for combo in &combos {
        assert_eq!(combo.members.len(), 1);
    }

    let empty = TypeIndex::build(Vec::new());
    assert!(enumerate_combinations(&empty, plan_arity(0)).is_empty());
}
