use std::path::PathBuf;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Error type for dataset, training and artifact operations
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Fitting failed: {0}")]
    Fit(String),

    #[error("Expected {expected} feature columns, got {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Length mismatch: {predicted} predictions for {actual} targets")]
    LengthMismatch { predicted: usize, actual: usize },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed artifact: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported artifact format version: {0}")]
    UnsupportedFormat(u32),

    #[error("Artifact classes {found:?} do not match label table {expected:?}")]
    ClassMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}
