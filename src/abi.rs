//! ABI encoding of proofs for verifier calldata

use alloy_primitives::Bytes;
use alloy_sol_types::SolValue;

use crate::error::ProverError;
use crate::noir::Proof;

/// Encode a proof as `abi.encode(bytes)`.
pub fn encode_proof(proof: &Proof) -> Bytes {
    Bytes::from(proof.bytes().abi_encode())
}

/// Decode a single ABI `bytes` value.
pub fn decode_proof(data: &[u8]) -> Result<Bytes, ProverError> {
    Bytes::abi_decode(data).map_err(|e| ProverError::Encoding(e.to_string()))
}

pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}
