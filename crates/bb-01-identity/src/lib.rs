//! # bb-01-identity
//!
//! Identity Verifier subsystem for Bounty-Board.
//!
//! ## Role in System
//!
//! - Establishes which wallet a caller controls before the Lifecycle
//!   Controller evaluates any authorization rule
//! - Verifies Ed25519 signatures over a caller-supplied challenge message
//! - Offers a permissive strategy for local development that accepts a bare
//!   address; production configuration fails closed if it is selected
//!
//! ## Security
//!
//! - Challenge messages are prefixed with `b"MX"` before verification,
//!   matching the wallet signing convention of the payment network
//! - `verify_strict` is used to reject malleable / non-canonical signatures

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::*;
