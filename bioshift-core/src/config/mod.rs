//! Engine configuration.
//!
//! All roots are injected here; nothing in the engine reads the process
//! working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMBO_OUTPUT_DIR, DEFAULT_GROUP_OUTPUT_DIR, DEFAULT_REPLICATE_EXTENSION,
    DEFAULT_REPLICATE_PREFIX,
};
use crate::errors::ConfigError;

/// Configuration for one engine run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tree searched (recursively) for group directories.
    pub input_root: PathBuf,
    /// Where per-group artifacts land. Default: `Observed_Shifts_by_group`
    /// under the input root.
    pub group_output_root: Option<PathBuf>,
    /// Where combination artifacts land. Default: `Observed_Shifts` under
    /// the input root.
    pub combo_output_root: Option<PathBuf>,
    /// File-name prefix selecting replicate files inside a group. Default: `Input_`.
    pub replicate_prefix: Option<String>,
    /// File-name extension selecting replicate files. Default: `.csv`.
    pub replicate_extension: Option<String>,
}

impl EngineConfig {
    pub fn new(input_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            ..Default::default()
        }
    }

    /// Load config from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the effective per-group output root.
    pub fn effective_group_output_root(&self) -> PathBuf {
        self.group_output_root
            .clone()
            .unwrap_or_else(|| self.input_root.join(DEFAULT_GROUP_OUTPUT_DIR))
    }

    /// Returns the effective combination output root.
    pub fn effective_combo_output_root(&self) -> PathBuf {
        self.combo_output_root
            .clone()
            .unwrap_or_else(|| self.input_root.join(DEFAULT_COMBO_OUTPUT_DIR))
    }

    /// Returns the effective replicate file prefix, defaulting to `Input_`.
    pub fn effective_replicate_prefix(&self) -> &str {
        self.replicate_prefix
            .as_deref()
            .unwrap_or(DEFAULT_REPLICATE_PREFIX)
    }

    /// Returns the effective replicate file extension, defaulting to `.csv`.
    pub fn effective_replicate_extension(&self) -> &str {
        self.replicate_extension
            .as_deref()
            .unwrap_or(DEFAULT_REPLICATE_EXTENSION)
    }

    /// Validate the configuration before a run.
    ///
    /// The input root must be an existing directory, and the two output
    /// roots must be distinct and not nested inside each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input_root.is_dir() {
            return Err(ConfigError::ValidationFailed {
                field: "input_root".into(),
                message: format!("not an existing directory: {}", self.input_root.display()),
            });
        }

        let group_root = self.effective_group_output_root();
        let combo_root = self.effective_combo_output_root();
        if group_root == combo_root {
            return Err(ConfigError::ValidationFailed {
                field: "combo_output_root".into(),
                message: "must differ from group_output_root".into(),
            });
        }
        if group_root.starts_with(&combo_root) || combo_root.starts_with(&group_root) {
            return Err(ConfigError::ValidationFailed {
                field: "combo_output_root".into(),
                message: "output roots must not be nested inside each other".into(),
            });
        }

        if self.effective_replicate_prefix().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "replicate_prefix".into(),
                message: "must not be empty".into(),
            });
        }

        Ok(())
    }
}
