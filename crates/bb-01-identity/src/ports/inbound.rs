//! Inbound (Driving) port for the Identity subsystem.

use crate::domain::{AuthHeaders, IdentityError};
use shared_types::Caller;

/// Authentication entry point used by the transport layer before any
/// lifecycle operation runs.
pub trait IdentityApi: Send + Sync {
    /// Establishes the caller's identity from request headers.
    ///
    /// # Returns
    /// - `Ok(Caller::Wallet(_))` when the caller proved control of a wallet
    /// - `Ok(Caller::Anonymous)` when the permissive strategy accepted a
    ///   request with no address
    /// - `Err` when authentication material is missing or invalid
    fn authenticate(&self, headers: &AuthHeaders) -> Result<Caller, IdentityError>;
}
