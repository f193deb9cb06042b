//! Cross-category combination: arity planning, tuple enumeration, and
//! shift merging.

pub mod generator;
pub mod merger;
pub mod planner;

pub use generator::{enumerate_combinations, PlannedCombo};
pub use merger::merge_tables;
pub use planner::plan_arity;
