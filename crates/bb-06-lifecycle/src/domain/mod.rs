//! # Domain Layer - Task Lifecycle
//!
//! The error taxonomy, request validation, per-task locking, and scoring
//! vocabulary of the Lifecycle Controller. No I/O lives here.

pub mod errors;
pub mod locks;
pub mod requests;
pub mod scoring;

pub use errors::*;
pub use locks::*;
pub use requests::*;
pub use scoring::*;
