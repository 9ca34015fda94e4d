//! Prover configuration

use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Compiled panagram circuit, relative to this crate
pub const DEFAULT_CIRCUIT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../target/zk_panagram.json");

/// Backend proving options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofOptions {
    /// Number of proving threads handed to the backend
    pub threads: usize,
    /// Produce proofs with a keccak transcript for EVM verifiers
    pub keccak: bool,
}

impl Default for ProofOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            keccak: true,
        }
    }
}

/// Orchestrator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// Path to the compiled circuit JSON
    pub circuit_path: PathBuf,
    /// Noir project directory; derived from `circuit_path` when unset
    pub program_dir: Option<PathBuf>,
    /// `nargo` executable
    pub nargo_bin: PathBuf,
    /// `bb` executable
    pub bb_bin: PathBuf,
    pub options: ProofOptions,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            circuit_path: PathBuf::from(DEFAULT_CIRCUIT_PATH),
            program_dir: None,
            nargo_bin: PathBuf::from("nargo"),
            bb_bin: PathBuf::from("bb"),
            options: ProofOptions::default(),
        }
    }
}

impl ProverConfig {
    /// Create a configuration for a circuit at `circuit_path`, defaults elsewhere
    pub fn with_circuit(circuit_path: impl Into<PathBuf>) -> Self {
        Self {
            circuit_path: circuit_path.into(),
            ..Self::default()
        }
    }
}
