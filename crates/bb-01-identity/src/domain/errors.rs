//! Identity error types.

use thiserror::Error;

/// Authentication failures.
///
/// Distinct from lifecycle errors: these mean "we could not establish who
/// you are", never "you are not allowed to do this".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// No wallet address header was presented.
    #[error("Missing wallet address header")]
    MissingAddress,

    /// Strict mode requires a signature and challenge message.
    #[error("Missing wallet signature or challenge message header")]
    MissingSignature,

    /// The address does not decode to a 32-byte Ed25519 public key.
    #[error("Malformed wallet address: {0}")]
    MalformedAddress(String),

    /// The signature is not 64 hex-decodable bytes.
    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    /// The signature does not verify for this address and message.
    #[error("Invalid wallet signature")]
    SignatureInvalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(IdentityError::MissingAddress
            .to_string()
            .contains("wallet address"));
        assert!(IdentityError::MalformedAddress("xyz".to_string())
            .to_string()
            .contains("xyz"));
    }
}
