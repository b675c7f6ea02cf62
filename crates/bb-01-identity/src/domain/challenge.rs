//! Challenge-signature verification.
//!
//! A wallet proves control of its address by signing a client-chosen
//! challenge message. Wallets on the payment network prefix signed messages
//! with `"MX"`, so verification must apply the same prefix.

use super::errors::IdentityError;
use ed25519_dalek::{Signature, VerifyingKey};

/// Prefix applied to challenge messages before signing.
pub const CHALLENGE_PREFIX: &[u8] = b"MX";

/// Verifies an Ed25519 wallet signature over a challenge message.
///
/// The address is the hex encoding of the wallet's 32-byte public key; the
/// signature is hex-encoded as well (64 bytes).
///
/// # Errors
/// - `MalformedAddress` if the address is not a valid public key
/// - `MalformedSignature` if the signature is not 64 hex bytes
/// - `SignatureInvalid` if verification fails
pub fn verify_wallet_signature(
    address: &str,
    signature_hex: &str,
    message: &str,
) -> Result<(), IdentityError> {
    let key_bytes: [u8; 32] = hex::decode(address)
        .ok()
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| IdentityError::MalformedAddress(address.to_string()))?;
    let key = VerifyingKey::from_bytes(&key_bytes)
        .map_err(|_| IdentityError::MalformedAddress(address.to_string()))?;

    let sig_bytes: [u8; 64] = hex::decode(signature_hex)
        .ok()
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| IdentityError::MalformedSignature(signature_hex.to_string()))?;
    let signature = Signature::from_bytes(&sig_bytes);

    let mut prefixed = Vec::with_capacity(CHALLENGE_PREFIX.len() + message.len());
    prefixed.extend_from_slice(CHALLENGE_PREFIX);
    prefixed.extend_from_slice(message.as_bytes());

    key.verify_strict(&prefixed, &signature)
        .map_err(|_| IdentityError::SignatureInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn test_wallet() -> (SigningKey, String) {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        let address = hex::encode(signing_key.verifying_key().to_bytes());
        (signing_key, address)
    }

    fn sign_challenge(key: &SigningKey, message: &str) -> String {
        let mut prefixed = CHALLENGE_PREFIX.to_vec();
        prefixed.extend_from_slice(message.as_bytes());
        hex::encode(key.sign(&prefixed).to_bytes())
    }

    #[test]
    fn test_valid_signature_verifies() {
        let (key, address) = test_wallet();
        let signature = sign_challenge(&key, "login:1700000000");
        assert!(verify_wallet_signature(&address, &signature, "login:1700000000").is_ok());
    }

    #[test]
    fn test_unprefixed_signature_is_rejected() {
        let (key, address) = test_wallet();
        // Signed without the wallet prefix.
        let signature = hex::encode(key.sign(b"login:1700000000").to_bytes());
        assert_eq!(
            verify_wallet_signature(&address, &signature, "login:1700000000"),
            Err(IdentityError::SignatureInvalid)
        );
    }

    #[test]
    fn test_wrong_message_is_rejected() {
        let (key, address) = test_wallet();
        let signature = sign_challenge(&key, "login:1");
        assert_eq!(
            verify_wallet_signature(&address, &signature, "login:2"),
            Err(IdentityError::SignatureInvalid)
        );
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let (key, _) = test_wallet();
        let (_, other_address) = test_wallet();
        let signature = sign_challenge(&key, "login:1");
        assert_eq!(
            verify_wallet_signature(&other_address, &signature, "login:1"),
            Err(IdentityError::SignatureInvalid)
        );
    }

    #[test]
    fn test_malformed_inputs() {
        let (key, address) = test_wallet();
        let signature = sign_challenge(&key, "m");

        assert!(matches!(
            verify_wallet_signature("not-hex", &signature, "m"),
            Err(IdentityError::MalformedAddress(_))
        ));
        assert!(matches!(
            verify_wallet_signature(&address, "beef", "m"),
            Err(IdentityError::MalformedSignature(_))
        ));
    }
}
