//! Ports for the Double-Spend Guard subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
