//! Proof-scoring adapters.
//!
//! The real audit capability is an external AI service; outside production
//! the runtime wires one of these stand-ins behind the same `ProofScorer`
//! port.

use async_trait::async_trait;
use bb_06_lifecycle::{ProofScore, ProofScorer, ScoreError, ScoreVerdict};
use tracing::debug;

/// Deterministic offline scorer.
///
/// Grades the proof URL on shape alone: a repository link scores highest,
/// any https link passes a default threshold, everything else fails. Keeps
/// the auto-verification flow exercisable without the external service.
pub struct HeuristicScorer {
    pass_threshold: f64,
}

impl HeuristicScorer {
    pub fn new(pass_threshold: f64) -> Self {
        Self { pass_threshold }
    }
}

#[async_trait]
impl ProofScorer for HeuristicScorer {
    async fn score(
        &self,
        _description: &str,
        proof_url: &str,
    ) -> Result<ProofScore, ScoreError> {
        let url = proof_url.trim();
        let (score, reasoning) = if url.contains("github.com/") {
            (0.85, "Repository link provided; content assumed reviewable")
        } else if url.starts_with("https://") {
            (0.75, "Secure link provided; content not independently audited")
        } else {
            (0.40, "Proof is not a verifiable link")
        };

        let verdict = if score >= self.pass_threshold {
            ScoreVerdict::Pass
        } else {
            ScoreVerdict::Fail
        };
        debug!(score, ?verdict, "Heuristic proof score");
        Ok(ProofScore {
            score,
            verdict,
            reasoning: reasoning.to_string(),
        })
    }
}

/// Scorer wired when scoring is disabled; every request degrades the same
/// way a service outage would.
pub struct OfflineScorer;

#[async_trait]
impl ProofScorer for OfflineScorer {
    async fn score(
        &self,
        _description: &str,
        _proof_url: &str,
    ) -> Result<ProofScore, ScoreError> {
        Err(ScoreError::Unavailable(
            "proof scoring is disabled".to_string(),
        ))
    }
}
