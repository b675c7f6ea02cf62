//! Ports for the Ledger Gateway subsystem.

pub mod inbound;

pub use inbound::*;
