//! Lifecycle request types and input validation.

use crate::domain::errors::LifecycleError;
use shared_types::{Amount, Timestamp};

/// Title length bounds (characters).
pub const TITLE_MAX_LEN: usize = 200;
/// Description length bounds (characters).
pub const DESCRIPTION_MAX_LEN: usize = 2000;
/// Minimum plausible wallet address length.
pub const WALLET_MIN_LEN: usize = 10;

/// Validates a wallet address field.
pub fn validate_wallet(address: &str, field: &str) -> Result<(), LifecycleError> {
    let trimmed = address.trim();
    if trimmed.len() < WALLET_MIN_LEN {
        return Err(LifecycleError::ValidationFailed(format!(
            "{field} must be at least {WALLET_MIN_LEN} characters"
        )));
    }
    Ok(())
}

/// Input for funding a new task.
#[derive(Debug, Clone)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    /// Bounty to escrow; must be positive.
    pub amount: Amount,
    /// Wallet that funded the escrow deposit.
    pub creator_wallet: String,
    /// Optional deadline (ms since epoch) enabling the expiry refund path.
    pub deadline: Option<Timestamp>,
    /// Funding transaction identifier; required under a strict deposit
    /// policy.
    pub tx_id: Option<String>,
}

impl CreateTaskRequest {
    /// Checks field bounds; does NOT verify the deposit (that is the
    /// Double-Spend Guard's job).
    pub fn validate(&self) -> Result<(), LifecycleError> {
        let title_len = self.title.trim().chars().count();
        if title_len == 0 || title_len > TITLE_MAX_LEN {
            return Err(LifecycleError::ValidationFailed(format!(
                "title must be 1-{TITLE_MAX_LEN} characters"
            )));
        }
        let description_len = self.description.trim().chars().count();
        if description_len == 0 || description_len > DESCRIPTION_MAX_LEN {
            return Err(LifecycleError::ValidationFailed(format!(
                "description must be 1-{DESCRIPTION_MAX_LEN} characters"
            )));
        }
        if self.amount.is_zero() {
            return Err(LifecycleError::ValidationFailed(
                "amount must be positive".to_string(),
            ));
        }
        validate_wallet(&self.creator_wallet, "creator_wallet")
    }
}

/// Input for submitting proof of completion.
#[derive(Debug, Clone)]
pub struct SubmitProofRequest {
    pub task_id: String,
    /// Evidence of the completed work; must be non-empty.
    pub proof_url: String,
    /// When set, the proof is scored immediately and a PASS verdict
    /// auto-completes the task.
    pub ai_verify: bool,
}

impl SubmitProofRequest {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.proof_url.trim().is_empty() {
            return Err(LifecycleError::ValidationFailed(
                "proof_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
