//! Error types for tracker operations.

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Error type for tracker operations
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid artifact reference: {0}")]
    InvalidReference(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Metadata error: {0}")]
    Metadata(#[from] serde_json::Error),
}
