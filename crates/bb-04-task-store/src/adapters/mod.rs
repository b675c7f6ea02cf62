//! Adapters for the Task Store subsystem.

pub mod file;
pub mod memory;

pub use file::FileBackedKVStore;
pub use memory::MemoryKVStore;
