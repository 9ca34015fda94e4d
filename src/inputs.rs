//! Circuit inputs

use serde::{Serialize, Deserialize};

use crate::error::ProverError;

pub const GUESS_HASH_FIELD: &str = "guess_hash";
pub const ANSWER_HASH_FIELD: &str = "answer_hash";

/// The two hashes the panagram circuit is executed against.
///
/// Values are passed through verbatim; malformed hashes are rejected by the
/// circuit executor, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPair {
    pub guess_hash: String,
    pub answer_hash: String,
}

impl InputPair {
    pub fn new(guess_hash: impl Into<String>, answer_hash: impl Into<String>) -> Self {
        Self {
            guess_hash: guess_hash.into(),
            answer_hash: answer_hash.into(),
        }
    }

    /// Field name / value pairs in circuit parameter order
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [
            (GUESS_HASH_FIELD, self.guess_hash.as_str()),
            (ANSWER_HASH_FIELD, self.answer_hash.as_str()),
        ]
    }

    /// Render as a Noir prover input file.
    pub fn to_prover_toml(&self) -> Result<String, ProverError> {
        let mut toml = String::new();
        for (name, value) in self.fields() {
            // A JSON string literal is also a valid TOML basic string
            toml.push_str(&format!("{} = {}\n", name, serde_json::to_string(value)?));
        }
        Ok(toml)
    }
}
