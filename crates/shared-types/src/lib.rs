//! # Shared Types Crate
//!
//! This crate contains all domain entities shared across the Bounty-Board
//! subsystems: tasks and their lifecycle states, fixed-point amounts,
//! ledger records, deposit verdicts, and settlement receipts.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Integer Money**: Amounts are `u64` micro-units; no floating point
//!   touches a balance.
//! - **Stable JSON**: Every persisted entity derives `Serialize` /
//!   `Deserialize` with a stable field layout.

pub mod amount;
pub mod entities;
pub mod errors;

pub use amount::Amount;
pub use entities::*;
pub use errors::*;
