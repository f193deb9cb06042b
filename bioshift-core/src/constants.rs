//! Shared constants for the BioShift combination engine.

/// Directory-name prefix identifying a group (matched case-insensitively).
pub const GROUP_DIR_PREFIX: &str = "group_";

/// Default file-name prefix for replicate observation files.
pub const DEFAULT_REPLICATE_PREFIX: &str = "Input_";

/// Default file-name extension for replicate observation files.
pub const DEFAULT_REPLICATE_EXTENSION: &str = ".csv";

/// Default directory name for per-group artifacts, under the input root.
pub const DEFAULT_GROUP_OUTPUT_DIR: &str = "Observed_Shifts_by_group";

/// Default directory name for combination artifacts, under the input root.
pub const DEFAULT_COMBO_OUTPUT_DIR: &str = "Observed_Shifts";

/// Header cell naming the element column in replicate files.
pub const ELEMENT_COLUMN: &str = "Element";

/// Header cell naming the shift column in replicate files.
pub const SHIFT_COLUMN: &str = "Observed Shift";

/// Highest combination arity the planner will select.
pub const MAX_ARITY: usize = 3;

/// Zero-padding width of the combination counter in artifact names.
pub const COMBO_COUNTER_WIDTH: usize = 3;
