use std::path::PathBuf;
use thiserror::Error;

/// Proof generation error type
#[derive(Debug, Error)]
pub enum ProverError {
    /// Circuit artifact missing or unparsable
    #[error("Failed to load circuit artifact {}: {}", .path.display(), .reason)]
    ArtifactLoad { path: PathBuf, reason: String },

    /// Inputs rejected by the circuit executor
    #[error("Circuit execution failed: {0}")]
    Execution(String),

    /// Backend failed to produce a proof
    #[error("Proof generation failed: {0}")]
    Proving(String),

    /// ABI payload could not be decoded
    #[error("ABI encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProverError {
    pub(crate) fn artifact_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ArtifactLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
