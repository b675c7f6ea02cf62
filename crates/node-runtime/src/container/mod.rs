//! Configuration and dependency-injection container.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, NodeConfig};
pub use subsystems::AppContainer;
