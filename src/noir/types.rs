//! Type definitions for the Noir toolchain

use std::time::Duration;
use alloy_primitives::Bytes;
use async_trait::async_trait;

use crate::artifact::CircuitArtifact;
use crate::config::ProofOptions;
use crate::error::ProverError;
use crate::inputs::InputPair;

/// Serialized witness produced by executing a circuit.
///
/// Not `Clone`: a witness is handed to exactly one proving call.
#[derive(Debug)]
pub struct Witness {
    bytes: Vec<u8>,
}

impl Witness {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Raw proof bytes from a proving backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    bytes: Bytes,
}

impl Proof {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Metadata recorded for a generated proof
#[derive(Debug, Clone)]
pub struct ProofMetadata {
    /// Wall time spent in the backend
    pub generation_time: Duration,
    /// Raw proof size in bytes
    pub proof_size: usize,
    /// Keccak-256 of the circuit bytecode, hex encoded
    pub circuit_hash: String,
}

/// Turns circuit inputs into a witness
#[async_trait]
pub trait CircuitExecutor: Send + Sync {
    async fn execute(
        &self,
        artifact: &CircuitArtifact,
        inputs: &InputPair,
    ) -> Result<Witness, ProverError>;
}

/// Turns a witness into a proof
#[async_trait]
pub trait ProvingBackend: Send + Sync {
    async fn prove(
        &self,
        artifact: &CircuitArtifact,
        witness: Witness,
        options: &ProofOptions,
    ) -> Result<Proof, ProverError>;

    /// Backend identifier used in logs
    fn id(&self) -> &'static str;
}
