//! # bb-02-ledger
//!
//! Transaction Ledger Gateway subsystem for Bounty-Board.
//!
//! ## Role in System
//!
//! - Wraps the external payment network behind the `LedgerGateway` trait:
//!   transaction lookup, payment submission, and balance queries
//! - The adapter is selected once at startup: the in-process
//!   `SimulatedLedger` for development and tests, or a real network client
//!   implementing the same trait in production
//!
//! Business logic never branches on which adapter is active; the trait is
//! the whole contract.

pub mod adapters;
pub mod ports;

pub use adapters::*;
pub use ports::*;
