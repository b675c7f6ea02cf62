//! # Identity Verification Service
//!
//! Application service implementing `IdentityApi`.
//!
//! The strategy is chosen once at startup and injected; request handling
//! never branches on deployment configuration beyond this enum. The
//! permissive strategy exists for local development only — production
//! configuration validation rejects it (fail closed).

use crate::domain::{verify_wallet_signature, AuthHeaders, IdentityError};
use crate::ports::IdentityApi;
use shared_types::Caller;
use tracing::{debug, warn};

/// How callers prove wallet control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityStrategy {
    /// Signature over a challenge message is required.
    Strict,
    /// A bare address is trusted; an absent address is anonymous.
    /// Development only.
    Permissive,
}

/// Identity Verification Service.
#[derive(Debug, Clone)]
pub struct IdentityService {
    strategy: IdentityStrategy,
}

impl IdentityService {
    /// Creates a service with the given strategy.
    pub fn new(strategy: IdentityStrategy) -> Self {
        if strategy == IdentityStrategy::Permissive {
            warn!("Identity verification running in PERMISSIVE mode; never deploy this with real funds");
        }
        Self { strategy }
    }

    /// Strict, production-grade verification.
    pub fn strict() -> Self {
        Self::new(IdentityStrategy::Strict)
    }

    /// Permissive development verification.
    pub fn permissive() -> Self {
        Self::new(IdentityStrategy::Permissive)
    }

    /// The configured strategy.
    pub fn strategy(&self) -> IdentityStrategy {
        self.strategy
    }

    /// Returns true when running the development strategy.
    pub fn is_permissive(&self) -> bool {
        self.strategy == IdentityStrategy::Permissive
    }
}

impl IdentityApi for IdentityService {
    fn authenticate(&self, headers: &AuthHeaders) -> Result<Caller, IdentityError> {
        let address = match headers.address() {
            Some(address) => address,
            None => {
                return match self.strategy {
                    IdentityStrategy::Permissive => Ok(Caller::Anonymous),
                    IdentityStrategy::Strict => Err(IdentityError::MissingAddress),
                };
            }
        };

        if self.strategy == IdentityStrategy::Permissive {
            debug!(wallet = %address, "Permissive mode: trusting unsigned address");
            return Ok(Caller::Wallet(address.to_string()));
        }

        let signature = headers
            .signature
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(IdentityError::MissingSignature)?;
        let message = headers
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or(IdentityError::MissingSignature)?;

        verify_wallet_signature(address, signature, message)?;
        debug!(wallet = %address, "Wallet signature verified");
        Ok(Caller::Wallet(address.to_string()))
    }
}
