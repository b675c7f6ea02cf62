//! Adapters for the Ledger Gateway subsystem.

pub mod simulated;

pub use simulated::SimulatedLedger;
