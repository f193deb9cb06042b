//! Event payloads emitted during a run.

use std::path::PathBuf;

use crate::types::CategoryTag;

/// A replicate file rejected during aggregation (unreadable or missing a
/// required column). Sibling files in the group continue.
#[derive(Debug, Clone)]
pub struct FileRejectedEvent {
    pub group: String,
    pub path: PathBuf,
    pub reason: String,
}

/// One group aggregated into its table.
#[derive(Debug, Clone)]
pub struct GroupMergedEvent {
    pub group: String,
    /// None when the group name fit no category pattern; the group's
    /// artifact is still written but it is excluded from combinations.
    pub tag: Option<CategoryTag>,
    pub elements: usize,
    pub files_used: usize,
}

/// One group excluded from the run.
#[derive(Debug, Clone)]
pub struct GroupSkippedEvent {
    pub group: String,
    pub reason: String,
}

/// One combination artifact written.
#[derive(Debug, Clone)]
pub struct CombinationWrittenEvent {
    pub index: usize,
    pub name: String,
    pub elements: usize,
}

/// One combination failed to persist. Siblings keep running.
#[derive(Debug, Clone)]
pub struct CombinationFailedEvent {
    pub index: usize,
    pub name: String,
    pub error: String,
}

/// The run finished (all phases complete, nothing fatal).
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub groups_merged: usize,
    pub combinations_written: usize,
}
