//! Proof-scoring vocabulary.
//!
//! The scorer itself is an external capability behind the `ProofScorer`
//! port; these are the types that cross it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verdict returned by the proof-scoring capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreVerdict {
    /// The proof satisfies the task description; eligible for
    /// auto-completion.
    Pass,
    /// The proof does not satisfy the task description.
    Fail,
}

/// Result of scoring a proof against a task description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofScore {
    /// Confidence in `[0.0, 1.0]`.
    pub score: f64,
    pub verdict: ScoreVerdict,
    /// Short human-readable justification.
    pub reasoning: String,
}

impl ProofScore {
    /// True when the verdict allows auto-completion.
    pub fn passed(&self) -> bool {
        self.verdict == ScoreVerdict::Pass
    }
}

/// Failures of the scoring capability.
///
/// During `submit_proof` these degrade to "no auto-completion"; only the
/// standalone scoring operation surfaces them.
#[derive(Debug, Clone, Error)]
pub enum ScoreError {
    /// The scoring service could not be reached or timed out.
    #[error("Scoring service unavailable: {0}")]
    Unavailable(String),

    /// The scoring service answered with something unusable.
    #[error("Scoring response malformed: {0}")]
    Malformed(String),
}
