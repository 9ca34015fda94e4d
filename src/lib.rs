//! Proof generation for the zk_panagram circuit.
//!
//! Loads the compiled circuit, executes it against a guess/answer hash pair,
//! proves the witness with UltraHonk in keccak mode and ABI-encodes the proof
//! for an on-chain verifier.

pub mod abi;
pub mod artifact;
pub mod config;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod noir;
pub mod orchestrator;

// Re-export commonly used types
pub use artifact::CircuitArtifact;
pub use config::{ProofOptions, ProverConfig};
pub use error::ProverError;
pub use inputs::InputPair;
pub use noir::{BbBackend, CircuitExecutor, NargoExecutor, Proof, ProofMetadata, ProvingBackend, Witness};
pub use orchestrator::{GeneratedProof, ProofOrchestrator};
