//! # Domain Layer - Task Store
//!
//! Typed repositories layered over the raw `KeyValueStore` port. Each
//! repository owns one key prefix and the exclusivity its callers need:
//! check-then-write sequences run under a repository-level lock.

pub mod roles;
pub mod tasks;
pub mod used_tx;

pub use roles::RoleRegistry;
pub use tasks::TaskRepository;
pub use used_tx::UsedTxRegistry;
