//! # Bounty-Board Node Runtime
//!
//! Composition root for the Bounty-Board subsystems.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and the dependency-injection container
//! - `adapters/` - Bridges implementing each subsystem's outbound ports
//!   over the producing subsystem's service
//!
//! ## Wiring (leaf to root)
//!
//! ```text
//! KeyValueStore (memory / file)
//!       │
//!       ├── TaskRepository ──────────────┐
//!       ├── UsedTxRegistry ─┐            │
//!       └── RoleRegistry ──────────────┐ │
//!                           │          │ │
//! LedgerGateway (simulated / network)  │ │
//!       │                   │          │ │
//!       ├── DepositGuard ◄──┘          │ │
//!       └── SettlementEngine           │ │
//!               │                      │ │
//! IdentityService (strict / permissive)│ │
//!               │                      │ │
//!               ▼                      ▼ ▼
//!         TaskLifecycleService (the core)
//! ```
//!
//! Strategy selection (identity mode, ledger mode, deposit policy, storage
//! backend) happens exactly once, here; no business logic ever branches on
//! deployment configuration.

pub mod adapters;
pub mod container;

pub use container::config::{IdentityMode, LedgerMode};
pub use container::{AppContainer, ConfigError, NodeConfig};
