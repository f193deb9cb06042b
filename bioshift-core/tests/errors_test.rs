//! Tests for the error types and their conversions.

use std::path::PathBuf;

use bioshift_core::errors::*;

#[test]
fn sub_errors_convert_into_pipeline_error() {
    let config = ConfigError::ValidationFailed {
        field: "input_root".into(),
        message: "missing".into(),
    };
    let pipeline: PipelineError = config.into();
    assert!(matches!(pipeline, PipelineError::Config(_)));

    let discover = DiscoverError::EmptyInput {
        root: PathBuf::from("/data"),
    };
    let pipeline: PipelineError = discover.into();
    assert!(matches!(pipeline, PipelineError::Discover(_)));

    let table = TableError::MissingColumn {
        path: PathBuf::from("/data/Input_1.csv"),
        column: "Element",
    };
    let pipeline: PipelineError = table.into();
    assert!(matches!(pipeline, PipelineError::Table(_)));
}

#[test]
fn messages_name_the_offending_path() {
    let err = DiscoverError::EmptyInput {
        root: PathBuf::from("/data/runs"),
    };
    assert!(err.to_string().contains("/data/runs"));

    let err = TableError::MissingColumn {
        path: PathBuf::from("/data/Input_2.csv"),
        column: "Observed Shift",
    };
    let message = err.to_string();
    assert!(message.contains("Observed Shift"));
    assert!(message.contains("Input_2.csv"));
}

#[test]
fn combine_error_carries_its_source() {
    use std::error::Error as _;

    let err = CombineError {
        name: "001_C201.csv".into(),
        source: TableError::Io {
            path: PathBuf::from("/out/001_C201.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        },
    };
    assert!(err.to_string().contains("001_C201.csv"));
    assert!(err.source().is_some());
}
