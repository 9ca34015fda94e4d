//! Proof orchestration: execute, prove, encode

use std::time::Instant;
use alloy_primitives::Bytes;
use tracing::{debug, info};

use crate::abi;
use crate::artifact::CircuitArtifact;
use crate::config::{ProofOptions, ProverConfig};
use crate::error::ProverError;
use crate::inputs::InputPair;
use crate::logging;
use crate::noir::{BbBackend, CircuitExecutor, NargoExecutor, Proof, ProofMetadata, ProvingBackend};

/// Result of a successful proving run
#[derive(Debug, Clone)]
pub struct GeneratedProof {
    pub proof: Proof,
    /// `abi.encode(bytes)` of the proof
    pub encoded: Bytes,
    pub metadata: ProofMetadata,
}

impl GeneratedProof {
    /// Hex form of the encoded proof, as written to stdout
    pub fn to_hex(&self) -> String {
        abi::to_hex(&self.encoded)
    }
}

/// Drives a circuit from inputs to an ABI-encoded proof
pub struct ProofOrchestrator<E, B> {
    artifact: CircuitArtifact,
    executor: E,
    backend: B,
    options: ProofOptions,
}

impl ProofOrchestrator<NargoExecutor, BbBackend> {
    /// Load the configured artifact and wire up the `nargo`/`bb` toolchain
    pub fn from_config(config: &ProverConfig) -> Result<Self, ProverError> {
        let artifact = CircuitArtifact::load(&config.circuit_path)?;
        Ok(Self::new(
            artifact,
            NargoExecutor::new(&config.nargo_bin, config.program_dir.clone()),
            BbBackend::new(&config.bb_bin),
            config.options.clone(),
        ))
    }
}

impl<E, B> ProofOrchestrator<E, B>
where
    E: CircuitExecutor,
    B: ProvingBackend,
{
    pub fn new(artifact: CircuitArtifact, executor: E, backend: B, options: ProofOptions) -> Self {
        Self {
            artifact,
            executor,
            backend,
            options,
        }
    }

    pub fn artifact(&self) -> &CircuitArtifact {
        &self.artifact
    }

    pub async fn generate_proof(&self, inputs: &InputPair) -> Result<GeneratedProof, ProverError> {
        let witness = self.executor.execute(&self.artifact, inputs).await?;
        debug!(size = witness.len(), "Executed circuit");

        let start = Instant::now();
        let proof = {
            let _quiet = logging::quiet();
            self.backend.prove(&self.artifact, witness, &self.options).await?
        };
        let generation_time = start.elapsed();

        if proof.is_empty() {
            return Err(ProverError::Proving(format!(
                "{} backend returned an empty proof",
                self.backend.id()
            )));
        }

        let encoded = abi::encode_proof(&proof);
        let metadata = ProofMetadata {
            generation_time,
            proof_size: proof.len(),
            circuit_hash: self.artifact.circuit_id(),
        };
        info!(
            backend = self.backend.id(),
            proof_size = metadata.proof_size,
            "Proof generated in {:.2?}",
            generation_time
        );

        Ok(GeneratedProof {
            proof,
            encoded,
            metadata,
        })
    }
}
