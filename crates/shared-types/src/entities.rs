//! # Core Domain Entities
//!
//! Defines the entities that cross subsystem boundaries.
//!
//! ## Clusters
//!
//! - **Tasks**: `Task`, `TaskStatus`, `WalletRole`
//! - **Identity**: `Caller`
//! - **Ledger**: `LedgerRecord`, `TransactionKind`, `PaymentReceipt`
//! - **Escrow**: `VerifiedDeposit`, `Settlement`, `Refund`, `EscrowInfo`

use crate::amount::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CLUSTER A: TASKS
// =============================================================================

/// Short opaque task identifier (8-char lowercase hex, assigned at creation).
pub type TaskId = String;

/// Opaque wallet identity string.
pub type WalletAddress = String;

/// Opaque external transaction identifier.
pub type TxId = String;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Lifecycle state of a task.
///
/// State machine:
/// ```text
/// (funded) ──create──→ OPEN ──claim──→ CLAIMED ──submit_proof──→ SUBMITTED ──approve──→ COMPLETED
///                       │                 │                          │
///                       │cancel           ├──────── dispute ─────────┤
///                       ↓                 ↓                          ↓
///                   CANCELLED          DISPUTED ←────────────────────┘
///
/// OPEN / CLAIMED / SUBMITTED / DISPUTED ──deadline passed──→ EXPIRED (refund)
/// ```
///
/// `COMPLETED`, `CANCELLED`, and `EXPIRED` are terminal. `DISPUTED` is
/// terminal except for the deadline-expiry refund path; resolving a dispute
/// any other way is an administrative process outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    /// Funded and waiting for a worker.
    #[default]
    Open,
    /// A worker has bound themselves to the task.
    Claimed,
    /// The worker has submitted proof of completion.
    Submitted,
    /// Frozen pending administrative resolution.
    Disputed,
    /// Payment released to the worker.
    Completed,
    /// Unclaimed task cancelled; escrow refunded to the creator.
    Cancelled,
    /// Deadline passed; escrow refunded to the creator.
    Expired,
}

impl TaskStatus {
    /// Returns true if no further lifecycle transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Cancelled | TaskStatus::Expired
        )
    }

    /// Uppercase wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "OPEN",
            TaskStatus::Claimed => "CLAIMED",
            TaskStatus::Submitted => "SUBMITTED",
            TaskStatus::Disputed => "DISPUTED",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
            TaskStatus::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The central entity: an escrowed micro-task bounty.
///
/// INVARIANT-1: `amount` never changes after creation.
/// INVARIANT-2: `worker_wallet` is set at most once, by a successful claim,
/// and never equals `creator_wallet`.
/// INVARIANT-3: `tx_id` holds the most recent settlement transaction
/// (deposit, release, or refund) and is overwritten on each settlement event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, immutable.
    pub id: TaskId,
    /// Short human-readable summary (1-200 chars).
    pub title: String,
    /// Full description of the work (1-2000 chars).
    pub description: String,
    /// Escrowed bounty, fixed at creation.
    pub amount: Amount,
    /// Identity that funded the task, immutable.
    pub creator_wallet: WalletAddress,
    /// Identity that claimed the task; absent until CLAIMED.
    pub worker_wallet: Option<WalletAddress>,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// Evidence of completion; present from SUBMITTED onward.
    pub proof_url: Option<String>,
    /// Creation time (ms since epoch); lists order newest first by this.
    pub created_at: Timestamp,
    /// Optional deadline (ms since epoch) after which expiry refunds apply.
    pub deadline: Option<Timestamp>,
    /// Most recent settlement transaction identifier.
    pub tx_id: Option<TxId>,
    /// Reason recorded when the task was disputed.
    pub dispute_reason: Option<String>,
    /// Wallet that raised the dispute.
    pub disputed_by: Option<WalletAddress>,
}

impl Task {
    /// Returns true if the given wallet is the task's creator.
    pub fn is_creator(&self, wallet: &str) -> bool {
        self.creator_wallet == wallet
    }

    /// Returns true if the given wallet is the bound worker.
    pub fn is_worker(&self, wallet: &str) -> bool {
        self.worker_wallet.as_deref() == Some(wallet)
    }
}

/// Advisory marketplace role declared by a wallet. Has no effect on
/// authorization; purely display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletRole {
    /// Posts tasks and funds escrows.
    Poster,
    /// Claims and completes tasks.
    Acceptor,
}

impl WalletRole {
    /// Lowercase wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletRole::Poster => "poster",
            WalletRole::Acceptor => "acceptor",
        }
    }
}

impl fmt::Display for WalletRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poster" => Ok(WalletRole::Poster),
            "acceptor" => Ok(WalletRole::Acceptor),
            other => Err(format!("Unknown wallet role: {:?}", other)),
        }
    }
}

// =============================================================================
// CLUSTER B: IDENTITY
// =============================================================================

/// A caller identity as established by the Identity Verifier.
///
/// `Anonymous` is only producible by the permissive development strategy;
/// the strict strategy always yields a `Wallet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// No identity presented (permissive mode only).
    Anonymous,
    /// A verified wallet identity.
    Wallet(WalletAddress),
}

impl Caller {
    /// The wallet address, if one was verified.
    pub fn wallet(&self) -> Option<&str> {
        match self {
            Caller::Anonymous => None,
            Caller::Wallet(addr) => Some(addr),
        }
    }

    /// Returns true if this caller verified the given wallet.
    pub fn is(&self, wallet: &str) -> bool {
        self.wallet() == Some(wallet)
    }
}

// =============================================================================
// CLUSTER C: LEDGER
// =============================================================================

/// Classification of an external ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A plain value transfer.
    Payment,
    /// Anything else (asset transfer, application call, ...).
    Other,
}

/// A transaction as observed on the external payment network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Network transaction identifier.
    pub tx_id: TxId,
    /// Transaction classification.
    pub kind: TransactionKind,
    /// Sending wallet.
    pub sender: WalletAddress,
    /// Receiving wallet.
    pub receiver: WalletAddress,
    /// Transferred amount.
    pub amount: Amount,
    /// Round/block in which the transaction was confirmed; `None` while
    /// still pending.
    pub confirmed_round: Option<u64>,
    /// Free-form note attached to the transaction.
    pub note: Option<String>,
}

impl LedgerRecord {
    /// Returns true once the network has confirmed the transaction.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_round.is_some()
    }
}

/// Receipt for a payment submitted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Network transaction identifier of the outbound payment.
    pub tx_id: TxId,
    /// Amount actually paid out.
    pub amount: Amount,
}

// =============================================================================
// CLUSTER D: ESCROW
// =============================================================================

/// Outcome of a successful deposit verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedDeposit {
    /// The consumed funding transaction; `None` for permissive deposits
    /// that were accepted without an on-chain record.
    pub tx_id: Option<TxId>,
    /// The verified deposit amount.
    pub amount: Amount,
    /// True when the deposit was confirmed against the external ledger.
    pub on_chain: bool,
}

/// Result of releasing an escrowed bounty to a worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Transaction identifier of the payout.
    pub tx_id: TxId,
    /// Amount paid to the worker (bounty minus platform fee).
    pub worker_payout: Amount,
    /// Fee retained by the platform.
    pub platform_fee: Amount,
}

/// Result of refunding an escrowed bounty to its creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// Transaction identifier of the refund payment.
    pub tx_id: TxId,
    /// Full refunded amount (no fee deduction).
    pub amount: Amount,
}

/// Snapshot of the escrow account for status queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscrowInfo {
    /// The escrow wallet this system controls.
    pub escrow_address: WalletAddress,
    /// Current balance, if the ledger was reachable.
    pub balance: Option<Amount>,
    /// Platform fee percentage applied on release.
    pub fee_rate_percent: u64,
    /// False when running against the simulated ledger.
    pub configured: bool,
}
