use crate::error::{Error, Result};

#[cfg(feature = "aws-lc-rs")]
use aws_lc_rs::signature::{UnparsedPublicKey, ED25519};
#[cfg(not(feature = "aws-lc-rs"))]
use ring::signature::{UnparsedPublicKey, ED25519};

/// Length of an Ed25519 public key
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// Verify an EdDSA (Ed25519) signature against a raw 32-byte public key
pub fn verify(signing_input: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()> {
    UnparsedPublicKey::new(&ED25519, public_key)
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring::rand::SystemRandom;
    use ring::signature::{Ed25519KeyPair, KeyPair};

    fn generate_keypair() -> Ed25519KeyPair {
        let rng = SystemRandom::new();
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&rng).expect("Failed to generate key");
        Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).expect("Failed to parse key")
    }

    #[test]
    fn test_eddsa_valid_signature() {
        let key_pair = generate_keypair();
        let signing_input = b"eyJhbGciOiJFZERTQSJ9.eyJzdWIiOiIxIn0";
        let signature = key_pair.sign(signing_input);

        let public_key = key_pair.public_key().as_ref();
        assert_eq!(public_key.len(), ED25519_PUBLIC_KEY_LEN);
        assert!(verify(signing_input, signature.as_ref(), public_key).is_ok());
    }

    #[test]
    fn test_eddsa_modified_input() {
        let key_pair = generate_keypair();
        let signature = key_pair.sign(b"header.claims");

        let result = verify(b"header.claimz", signature.as_ref(), key_pair.public_key().as_ref());
        assert!(matches!(result, Err(Error::SignatureError)));
    }

    #[test]
    fn test_eddsa_short_key() {
        let key_pair = generate_keypair();
        let signature = key_pair.sign(b"header.claims");

        let result = verify(b"header.claims", signature.as_ref(), &[0u8; 16]);
        assert!(matches!(result, Err(Error::SignatureError)));
    }
}
