//! # Bounty-Board Test Suite
//!
//! Unified test crate exercising cross-subsystem flows through the wired
//! container — the same object graph the node binary runs.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── support.rs      # Container fixture and wallet helpers
//!     ├── flows.rs        # End-to-end lifecycle and settlement flows
//!     ├── concurrency.rs  # Race properties (claims, approvals, funding)
//!     └── persistence.rs  # Restart durability of the file-backed store
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bb-tests
//! cargo test -p bb-tests integration::flows::
//! ```

pub mod integration;
