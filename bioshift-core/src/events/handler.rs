//! ShiftEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing engine events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` is required
/// because combination events fire from rayon worker threads.
pub trait ShiftEventHandler: Send + Sync {
    // ---- Aggregation ----
    fn on_file_rejected(&self, _event: &FileRejectedEvent) {}
    fn on_group_merged(&self, _event: &GroupMergedEvent) {}
    fn on_group_skipped(&self, _event: &GroupSkippedEvent) {}

    // ---- Combination ----
    fn on_combination_written(&self, _event: &CombinationWrittenEvent) {}
    fn on_combination_failed(&self, _event: &CombinationFailedEvent) {}

    // ---- Lifecycle ----
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
}

/// Handler that ignores every event.
pub struct NoOpHandler;

impl ShiftEventHandler for NoOpHandler {}
