//! Error types for the BioShift combination engine, one enum per subsystem.

pub mod combine_error;
pub mod config_error;
pub mod discover_error;
pub mod pipeline_error;
pub mod table_error;

pub use combine_error::CombineError;
pub use config_error::ConfigError;
pub use discover_error::DiscoverError;
pub use pipeline_error::PipelineError;
pub use table_error::TableError;
