//! # bb-03-deposit-guard
//!
//! Double-Spend Guard subsystem for Bounty-Board.
//!
//! ## Role in System
//!
//! - Gates every task-funding request: a funding transaction must exist on
//!   the ledger, be confirmed, match the claimed sender, pay the escrow
//!   wallet, and cover the bounty amount
//! - Consumes each funding transaction identifier exactly once; a second
//!   task presenting the same identifier is rejected before any ledger
//!   lookup happens
//!
//! ## Security
//!
//! - The used-identifier check runs BEFORE the external lookup (fail fast,
//!   and a known-duplicate id never reaches the gateway)
//! - Success is only reported after the identifier was atomically inserted
//!   into the used set; two concurrent verifications of the same id cannot
//!   both succeed

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::*;
