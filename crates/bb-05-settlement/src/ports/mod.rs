//! Ports for the Settlement Engine subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
