//! The run pipeline: discover → aggregate → index → plan → enumerate →
//! merge → persist.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};

use bioshift_core::config::EngineConfig;
use bioshift_core::errors::{CombineError, PipelineError};
use bioshift_core::events::types::{
    CombinationFailedEvent, CombinationWrittenEvent, GroupMergedEvent, GroupSkippedEvent,
    RunCompleteEvent,
};
use bioshift_core::events::ShiftEventHandler;
use bioshift_core::types::TaggedTable;

use crate::aggregate::{merge_group, parse_tag};
use crate::combine::{enumerate_combinations, merge_tables, plan_arity, PlannedCombo};
use crate::discover::discover_groups;
use crate::index::TypeIndex;
use crate::naming::{combo_artifact_name, group_artifact_name, untagged_artifact_name};
use crate::table_io::write_table;

/// Counters for one completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub groups_discovered: usize,
    pub groups_merged: usize,
    /// Groups with zero usable replicate files.
    pub groups_skipped: usize,
    /// Merged groups whose name fit no category pattern; their artifacts
    /// exist but they took no part in combinations.
    pub groups_untagged: usize,
    pub files_rejected: usize,
    pub rows_skipped: usize,
    pub type_count: usize,
    pub arity: usize,
    pub combinations_planned: usize,
    pub combinations_written: usize,
    pub combinations_failed: usize,
}

/// One engine run over a configured input tree.
pub struct Pipeline {
    config: EngineConfig,
}

impl Pipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Execute the full run.
    ///
    /// Writes per-group artifacts under the group output root and
    /// combination artifacts under the combo output root, and nowhere
    /// else. Per-file and per-group problems are reported and survived;
    /// an empty input tree or any artifact write failure is fatal.
    pub fn run(&self, handler: &dyn ShiftEventHandler) -> Result<RunSummary, PipelineError> {
        self.config.validate()?;

        let group_root = self.config.effective_group_output_root();
        let combo_root = self.config.effective_combo_output_root();
        create_output_root(&group_root)?;
        create_output_root(&combo_root)?;

        let mut summary = RunSummary::default();

        // ---- Phase 1: aggregate every group ----
        let groups = discover_groups(&self.config)?;
        summary.groups_discovered = groups.len();
        info!("found {} groups under {}", groups.len(), self.config.input_root.display());

        let mut tagged = Vec::new();
        for group in &groups {
            let merged = merge_group(group, handler);
            summary.files_rejected += merged.files_rejected;
            summary.rows_skipped += merged.rows_skipped;

            let Some(table) = merged.table else {
                summary.groups_skipped += 1;
                handler.on_group_skipped(&GroupSkippedEvent {
                    group: group.name.clone(),
                    reason: "no valid replicate files".into(),
                });
                continue;
            };

            let tag = parse_tag(&group.name);
            let artifact = match &tag {
                Some(tag) => group_artifact_name(tag),
                None => untagged_artifact_name(&group.name),
            };
            write_table(&group_root.join(&artifact), &table)?;
            info!("merged {} -> {artifact}", group.name);

            summary.groups_merged += 1;
            handler.on_group_merged(&GroupMergedEvent {
                group: group.name.clone(),
                tag: tag.clone(),
                elements: table.len(),
                files_used: merged.files_used,
            });

            match tag {
                Some(tag) => tagged.push(TaggedTable::new(tag, table)),
                None => summary.groups_untagged += 1,
            }
        }

        // ---- Phase 2: index, plan, enumerate ----
        let index = TypeIndex::build(tagged);
        summary.type_count = index.type_count();
        summary.arity = plan_arity(index.type_count());
        let combos = enumerate_combinations(&index, summary.arity);
        summary.combinations_planned = combos.len();
        info!(
            "{} types -> {}-way combinations, {} tuples",
            summary.type_count, summary.arity, combos.len()
        );

        // ---- Phase 3: merge and persist, in parallel ----
        // Counter values were fixed during enumeration, so execution order
        // cannot affect artifact names. A failed tuple does not stop its
        // siblings; failures surface together afterwards.
        let failures: Vec<CombineError> = combos
            .par_iter()
            .filter_map(|combo| self.write_combination(combo, &combo_root, handler).err())
            .collect();

        summary.combinations_failed = failures.len();
        summary.combinations_written = summary.combinations_planned - failures.len();

        for failure in &failures {
            warn!("{failure}");
        }
        if !failures.is_empty() {
            return Err(PipelineError::CombinationFailures {
                failed: failures.len(),
                total: summary.combinations_planned,
            });
        }

        info!(
            "run complete: {} groups merged, {} combinations written",
            summary.groups_merged, summary.combinations_written
        );
        handler.on_run_complete(&RunCompleteEvent {
            groups_merged: summary.groups_merged,
            combinations_written: summary.combinations_written,
        });
        Ok(summary)
    }

    fn write_combination(
        &self,
        combo: &PlannedCombo,
        combo_root: &Path,
        handler: &dyn ShiftEventHandler,
    ) -> Result<(), CombineError> {
        let name = combo_artifact_name(combo.index, &combo.members);
        let combined = merge_tables(combo.members.iter().map(|m| m.table.as_ref()));

        match write_table(&combo_root.join(&name), &combined) {
            Ok(()) => {
                handler.on_combination_written(&CombinationWrittenEvent {
                    index: combo.index,
                    name,
                    elements: combined.len(),
                });
                Ok(())
            }
            Err(source) => {
                handler.on_combination_failed(&CombinationFailedEvent {
                    index: combo.index,
                    name: name.clone(),
                    error: source.to_string(),
                });
                Err(CombineError { name, source })
            }
        }
    }
}

fn create_output_root(path: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(path).map_err(|source| PipelineError::CreateOutputRoot {
        path: path.to_path_buf(),
        source,
    })
}
