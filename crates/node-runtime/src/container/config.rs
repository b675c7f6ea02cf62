//! # Node Configuration
//!
//! Unified configuration for all subsystems, loaded from `BB_*`
//! environment variables with development defaults.
//!
//! ## Security Requirements
//!
//! Production validation fails closed: a deployment that handles real
//! funds must never run with the permissive identity strategy, permissive
//! deposits, or the simulated ledger.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// How callers prove wallet control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMode {
    /// Ed25519 challenge signatures required.
    Strict,
    /// Bare addresses trusted. Development only.
    Permissive,
}

/// Which ledger gateway backs settlement and deposit verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerMode {
    /// In-process simulated network.
    Simulated,
    /// Real payment network via an injected gateway adapter.
    Network,
}

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Run production validation at startup and refuse to boot on failure.
    pub production: bool,
    /// Identity verification configuration.
    pub identity: IdentityConfig,
    /// Escrow account configuration.
    pub escrow: EscrowConfig,
    /// Ledger gateway configuration.
    pub ledger: LedgerConfig,
    /// Durable storage configuration.
    pub storage: StorageConfig,
    /// Proof-scoring configuration.
    pub scoring: ScoringConfig,
}

/// Identity verification configuration.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub mode: IdentityMode,
}

/// Escrow account configuration.
#[derive(Debug, Clone)]
pub struct EscrowConfig {
    /// The wallet deposits must pay and settlements are paid from.
    pub address: String,
    /// Require a funding transaction id on every create request.
    pub strict_deposits: bool,
}

/// Ledger gateway configuration.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub mode: LedgerMode,
    /// Upper bound on any single ledger call, in seconds.
    pub timeout_secs: u64,
}

impl LedgerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Durable storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the store file.
    pub data_dir: PathBuf,
    /// Use the file-backed store; false keeps everything in memory.
    pub file_backed: bool,
}

/// Proof-scoring configuration.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// When false, scoring requests degrade to "unavailable".
    pub enabled: bool,
    /// Minimum score for a PASS verdict.
    pub pass_threshold: f64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            production: false,
            identity: IdentityConfig {
                mode: IdentityMode::Permissive,
            },
            escrow: EscrowConfig {
                address: "ESCROW_WALLET_DEV".to_string(),
                strict_deposits: false,
            },
            ledger: LedgerConfig {
                mode: LedgerMode::Simulated,
                timeout_secs: 10,
            },
            storage: StorageConfig {
                data_dir: PathBuf::from("./data"),
                file_backed: true,
            },
            scoring: ScoringConfig {
                enabled: true,
                pass_threshold: 0.7,
            },
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Permissive identity accepts unsigned callers.
    #[error(
        "SECURITY VIOLATION: permissive identity mode in production. \
         Set BB_IDENTITY_MODE=strict."
    )]
    PermissiveIdentity,

    /// Optional funding ids disable the double-spend guarantee.
    #[error(
        "SECURITY VIOLATION: permissive deposits in production. \
         Set BB_STRICT_DEPOSITS=true."
    )]
    PermissiveDeposits,

    /// The simulated ledger moves no real funds.
    #[error("SECURITY VIOLATION: simulated ledger in production. Set BB_LEDGER_MODE=network.")]
    SimulatedLedger,

    /// No plausible escrow account to verify deposits against.
    #[error("Escrow address is not configured. Set BB_ESCROW_ADDRESS.")]
    MissingEscrowAddress,
}

impl NodeConfig {
    /// Loads configuration from `BB_*` environment variables, falling back
    /// to development defaults.
    pub fn from_env() -> Self {
        let mut config = NodeConfig::default();

        config.production = env_flag("BB_PRODUCTION").unwrap_or(config.production);
        if let Ok(mode) = std::env::var("BB_IDENTITY_MODE") {
            match mode.to_lowercase().as_str() {
                "strict" => config.identity.mode = IdentityMode::Strict,
                "permissive" => config.identity.mode = IdentityMode::Permissive,
                other => warn!(mode = other, "Unknown BB_IDENTITY_MODE, keeping default"),
            }
        }
        if let Ok(address) = std::env::var("BB_ESCROW_ADDRESS") {
            config.escrow.address = address;
        }
        config.escrow.strict_deposits =
            env_flag("BB_STRICT_DEPOSITS").unwrap_or(config.escrow.strict_deposits);
        if let Ok(mode) = std::env::var("BB_LEDGER_MODE") {
            match mode.to_lowercase().as_str() {
                "simulated" => config.ledger.mode = LedgerMode::Simulated,
                "network" => config.ledger.mode = LedgerMode::Network,
                other => warn!(mode = other, "Unknown BB_LEDGER_MODE, keeping default"),
            }
        }
        if let Some(secs) = env_parse::<u64>("BB_LEDGER_TIMEOUT_SECS") {
            config.ledger.timeout_secs = secs;
        }
        if let Ok(dir) = std::env::var("BB_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        config.storage.file_backed =
            env_flag("BB_FILE_STORE").unwrap_or(config.storage.file_backed);
        config.scoring.enabled =
            env_flag("BB_SCORING_ENABLED").unwrap_or(config.scoring.enabled);
        if let Some(threshold) = env_parse::<f64>("BB_SCORING_PASS_THRESHOLD") {
            config.scoring.pass_threshold = threshold;
        }

        config
    }

    /// Validates the configuration for a deployment handling real funds.
    ///
    /// # Returns
    ///
    /// Returns `Err` if any permissive development strategy is selected or
    /// the escrow account is missing.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.identity.mode == IdentityMode::Permissive {
            return Err(ConfigError::PermissiveIdentity);
        }
        if !self.escrow.strict_deposits {
            return Err(ConfigError::PermissiveDeposits);
        }
        if self.ledger.mode == LedgerMode::Simulated {
            return Err(ConfigError::SimulatedLedger);
        }
        if self.escrow.address.trim().len() < 10 {
            return Err(ConfigError::MissingEscrowAddress);
        }
        Ok(())
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
