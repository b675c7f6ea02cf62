//! # bb-06-lifecycle
//!
//! Task Lifecycle Controller subsystem for Bounty-Board. This is the core
//! of the system: every state transition, authorization rule, and
//! settlement side effect runs through here.
//!
//! ## Role in System
//!
//! - Enforces the task state machine (`OPEN → CLAIMED → SUBMITTED →
//!   COMPLETED`, with cancel / dispute / expiry branches)
//! - Authorizes every transition against the caller's verified wallet
//! - Couples settlement to state durability: a task only becomes
//!   `COMPLETED` / `CANCELLED` / `EXPIRED` after the corresponding payment
//!   was confirmed, never before
//!
//! ## Concurrency
//!
//! A per-task async mutex guards each read-check-settle-write sequence, so
//! two concurrent approvals of one task release payment at most once, and
//! two racing claims bind at most one worker. The lock map itself is held
//! only long enough to hand out a lock, never across an await point.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::*;
