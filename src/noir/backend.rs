//! UltraHonk proving through the `bb` CLI

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::command::run_tool;
use super::types::{Proof, ProvingBackend, Witness};
use crate::artifact::CircuitArtifact;
use crate::config::ProofOptions;
use crate::error::ProverError;

/// Barretenberg UltraHonk backend
#[derive(Debug, Clone)]
pub struct BbBackend {
    bb_bin: PathBuf,
}

impl BbBackend {
    pub fn new(bb_bin: impl Into<PathBuf>) -> Self {
        Self { bb_bin: bb_bin.into() }
    }

    fn prove_command(
        &self,
        circuit_path: &Path,
        witness_path: &Path,
        output_dir: &Path,
        options: &ProofOptions,
    ) -> Command {
        let mut cmd = Command::new(&self.bb_bin);
        cmd.arg("prove").args(["--scheme", "ultra_honk"]);
        if options.keccak {
            cmd.args(["--oracle_hash", "keccak"]);
        }
        cmd.arg("-b")
            .arg(circuit_path)
            .arg("-w")
            .arg(witness_path)
            .arg("-o")
            .arg(output_dir);
        // bb sizes its thread pool from this variable
        cmd.env("HARDWARE_CONCURRENCY", options.threads.max(1).to_string());
        cmd
    }
}

impl Default for BbBackend {
    fn default() -> Self {
        Self::new("bb")
    }
}

#[async_trait]
impl ProvingBackend for BbBackend {
    async fn prove(
        &self,
        artifact: &CircuitArtifact,
        witness: Witness,
        options: &ProofOptions,
    ) -> Result<Proof, ProverError> {
        let work_dir = tempfile::tempdir()?;
        // Prove against the artifact loaded at startup, not whatever is on disk now
        let circuit_path = work_dir.path().join("circuit.json");
        tokio::fs::write(&circuit_path, serde_json::to_vec(artifact)?).await?;
        let witness_path = work_dir.path().join("witness.gz");
        let output_dir = work_dir.path().join("out");
        tokio::fs::write(&witness_path, witness.as_bytes()).await?;
        tokio::fs::create_dir_all(&output_dir).await?;
        drop(witness);

        info!(
            threads = options.threads,
            keccak = options.keccak,
            "Proving circuit {}",
            artifact.circuit_id()
        );
        let cmd = self.prove_command(&circuit_path, &witness_path, &output_dir, options);
        run_tool("bb", cmd).await.map_err(ProverError::Proving)?;

        let proof_path = output_dir.join("proof");
        let bytes = tokio::fs::read(&proof_path).await.map_err(|e| {
            ProverError::Proving(format!("proof not found at {}: {}", proof_path.display(), e))
        })?;
        if bytes.is_empty() {
            return Err(ProverError::Proving("backend returned an empty proof".to_string()));
        }

        debug!(size = bytes.len(), "Proof read from {}", proof_path.display());
        Ok(Proof::new(bytes))
    }

    fn id(&self) -> &'static str {
        "ultra_honk"
    }
}
