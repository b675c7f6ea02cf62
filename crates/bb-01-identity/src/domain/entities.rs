//! Identity domain entities.

/// Authentication material extracted from a request by the transport layer.
///
/// Three headers are expected: the caller's wallet address, a signature over
/// a challenge message, and the challenge message itself (typically a
/// timestamp-based nonce chosen by the client).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Claimed wallet address.
    pub wallet_address: Option<String>,
    /// Hex-encoded Ed25519 signature over the prefixed challenge message.
    pub signature: Option<String>,
    /// The challenge message that was signed.
    pub message: Option<String>,
}

impl AuthHeaders {
    /// Headers carrying only a bare address (permissive mode input).
    pub fn of_wallet(wallet: impl Into<String>) -> Self {
        Self {
            wallet_address: Some(wallet.into()),
            signature: None,
            message: None,
        }
    }

    /// Fully signed headers (strict mode input).
    pub fn signed(
        wallet: impl Into<String>,
        signature: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            wallet_address: Some(wallet.into()),
            signature: Some(signature.into()),
            message: Some(message.into()),
        }
    }

    /// The trimmed wallet address, treating empty as absent.
    pub fn address(&self) -> Option<&str> {
        self.wallet_address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}
