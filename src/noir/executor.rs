//! Witness generation through `nargo execute`

use std::io::Write;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::command::run_tool;
use super::types::{CircuitExecutor, Witness};
use crate::artifact::CircuitArtifact;
use crate::error::ProverError;
use crate::inputs::InputPair;

/// Executes the compiled circuit's Noir project with `nargo`
#[derive(Debug, Clone)]
pub struct NargoExecutor {
    nargo_bin: PathBuf,
    program_dir: Option<PathBuf>,
}

impl NargoExecutor {
    pub fn new(nargo_bin: impl Into<PathBuf>, program_dir: Option<PathBuf>) -> Self {
        Self {
            nargo_bin: nargo_bin.into(),
            program_dir,
        }
    }

    /// Noir project root; the artifact lives in `<program>/target/`
    fn program_dir(&self, artifact: &CircuitArtifact) -> Result<PathBuf, ProverError> {
        if let Some(dir) = &self.program_dir {
            return Ok(dir.clone());
        }
        artifact
            .path()
            .parent()
            .and_then(Path::parent)
            .map(|dir| if dir.as_os_str().is_empty() { PathBuf::from(".") } else { dir.to_path_buf() })
            .ok_or_else(|| {
                ProverError::Execution(format!(
                    "cannot derive program directory from {}",
                    artifact.path().display()
                ))
            })
    }
}

impl Default for NargoExecutor {
    fn default() -> Self {
        Self::new("nargo", None)
    }
}

#[async_trait]
impl CircuitExecutor for NargoExecutor {
    async fn execute(
        &self,
        artifact: &CircuitArtifact,
        inputs: &InputPair,
    ) -> Result<Witness, ProverError> {
        let program_dir = self.program_dir(artifact)?;

        // Prover inputs live next to Nargo.toml for the duration of the call
        let mut prover_file = tempfile::Builder::new()
            .prefix("Prover-")
            .suffix(".toml")
            .tempfile_in(&program_dir)?;
        prover_file.write_all(inputs.to_prover_toml()?.as_bytes())?;
        prover_file.flush()?;

        let prover_name = prover_file
            .path()
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_owned)
            .ok_or_else(|| ProverError::Execution("invalid prover file name".to_string()))?;
        let witness_name = format!("{}-witness", prover_name);

        let mut cmd = Command::new(&self.nargo_bin);
        cmd.arg("execute")
            .arg(&witness_name)
            .arg("--program-dir")
            .arg(&program_dir)
            .arg("--prover-name")
            .arg(&prover_name);

        info!("Executing circuit {}", artifact.circuit_id());
        run_tool("nargo", cmd).await.map_err(ProverError::Execution)?;

        let witness_path = program_dir
            .join("target")
            .join(format!("{}.gz", witness_name));

        let bytes = tokio::fs::read(&witness_path).await.map_err(|e| {
            ProverError::Execution(format!(
                "witness not found at {}: {}",
                witness_path.display(),
                e
            ))
        })?;
        tokio::fs::remove_file(&witness_path).await?;

        // nargo recompiles the project; the witness only fits the loaded circuit if it is unchanged
        let on_disk = CircuitArtifact::load(artifact.path())
            .map_err(|e| ProverError::Execution(format!("circuit changed during execution: {}", e)))?;
        if on_disk.bytecode_hash() != artifact.bytecode_hash() {
            return Err(ProverError::Execution(format!(
                "circuit at {} was recompiled during execution (loaded {}, now {})",
                artifact.path().display(),
                artifact.circuit_id(),
                on_disk.circuit_id()
            )));
        }

        debug!(size = bytes.len(), "Witness generated");
        Ok(Witness::new(bytes))
    }
}
