//! Compiled circuit artifact

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use sha3::{Digest, Keccak256};
use tracing::debug;

use crate::error::ProverError;
use crate::inputs::{ANSWER_HASH_FIELD, GUESS_HASH_FIELD};

/// Parameter entry of the circuit ABI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiParameter {
    pub name: String,
}

/// Circuit ABI as emitted by the compiler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircuitAbi {
    #[serde(default)]
    pub parameters: Vec<AbiParameter>,
}

/// A compiled circuit loaded from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noir_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<CircuitAbi>,
    /// Base64 encoded, compressed ACIR program
    pub bytecode: String,
    #[serde(skip)]
    path: PathBuf,
}

impl CircuitArtifact {
    /// Read and parse the artifact at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProverError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ProverError::artifact_load(path, e))?;
        let mut artifact = Self::parse(&content)
            .map_err(|e| ProverError::artifact_load(path, e))?;
        artifact.path = path.to_path_buf();

        debug!(
            path = %path.display(),
            circuit = %artifact.circuit_id(),
            noir_version = artifact.noir_version.as_deref().unwrap_or("unknown"),
            "Loaded circuit artifact"
        );
        Ok(artifact)
    }

    /// Parse an artifact from its JSON form
    pub fn parse(content: &str) -> Result<Self, ProverError> {
        let artifact: Self = serde_json::from_str(content)?;
        if artifact.bytecode.trim().is_empty() {
            return Err(ProverError::Serialization(serde::de::Error::custom(
                "bytecode is empty",
            )));
        }
        if artifact.abi.is_some() {
            let names = artifact.parameter_names();
            for field in [GUESS_HASH_FIELD, ANSWER_HASH_FIELD] {
                if !names.contains(&field) {
                    return Err(ProverError::Serialization(serde::de::Error::custom(
                        format!("circuit does not declare a `{}` parameter", field),
                    )));
                }
            }
        }
        Ok(artifact)
    }

    /// File the artifact was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keccak-256 of the bytecode
    pub fn bytecode_hash(&self) -> [u8; 32] {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&Keccak256::digest(self.bytecode.as_bytes()));
        hash
    }

    /// Hex form of [`Self::bytecode_hash`]
    pub fn circuit_id(&self) -> String {
        hex::encode(self.bytecode_hash())
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.abi
            .iter()
            .flat_map(|abi| abi.parameters.iter())
            .map(|p| p.name.as_str())
            .collect()
    }
}
