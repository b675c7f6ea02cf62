//! # bb-04-task-store
//!
//! Task Store subsystem for Bounty-Board.
//!
//! ## Role in System
//!
//! - Owns the `KeyValueStore` port: the only durable state in the system
//!   (tasks, the used-transaction set, and wallet roles) lives behind it
//! - Ships two adapters: `MemoryKVStore` for tests and development, and
//!   `FileBackedKVStore` for single-node production without a database
//! - Exposes typed repositories over the raw port, one per key prefix
//!
//! ## Durability
//!
//! - Every file-store mutation is written to a temp file, fsynced, and
//!   atomically renamed over the previous document; a crash mid-write
//!   leaves the committed state intact
//! - An `fs2` advisory lock guards the store file against a second process

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
