//! Ports for the Task Lifecycle Controller.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
