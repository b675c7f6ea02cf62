//! # bb-05-settlement
//!
//! Settlement Engine subsystem for Bounty-Board.
//!
//! ## Role in System
//!
//! - Computes the platform-fee split and pays workers on release
//! - Refunds creators in full on cancel and expiry
//! - Bounds every ledger call with a timeout; a timeout or gateway error is
//!   a clean failure with no partial effect, so the Lifecycle Controller
//!   can leave task state untouched and let the caller retry
//!
//! ## Atomicity Contract
//!
//! Success is only reported once the ledger confirmed the payment. Outbound
//! payments are NOT deduplicated: a retry after a reported failure submits
//! a fresh ledger transaction. Only inbound deposits are consumed
//! exactly-once (bb-03).

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::*;
