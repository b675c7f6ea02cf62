//! Ports for the Task Store subsystem.

pub mod outbound;

pub use outbound::*;
