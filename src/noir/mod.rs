//! Noir toolchain integration
//!
//! Circuit execution and proving are delegated to the external `nargo` and
//! `bb` binaries, each behind its own trait so the orchestrator can be driven
//! by any executor/backend pair.

mod backend;
mod command;
mod executor;
mod types;

#[cfg(test)]
mod tests;

pub use backend::BbBackend;
pub use executor::NargoExecutor;
pub use types::{CircuitExecutor, Proof, ProofMetadata, ProvingBackend, Witness};
