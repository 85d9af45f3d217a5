//! Verification keys
//!
//! A [`VerificationKey`] is the resolved key material for one token. The set of
//! key kinds is closed; dispatch to the matching algorithm backend is a plain
//! `match` in [`VerificationKey::verify`].

use crate::algorithm::ecdsa::EcdsaCurve;
use crate::algorithm::{self, AlgorithmFamily, AlgorithmId};
use crate::error::{Error, Result};

/// A key that can be used for JWT signature verification
#[derive(Clone, PartialEq, Eq)]
pub enum VerificationKey {
    /// Shared secret for HMAC algorithms
    Hmac(Vec<u8>),

    /// RSA public key as big-endian modulus and exponent
    Rsa { n: Vec<u8>, e: Vec<u8> },

    /// ECDSA public key as an uncompressed SEC1 point
    Ecdsa { curve: EcdsaCurve, point: Vec<u8> },

    /// Raw 32-byte Ed25519 public key
    Ed25519(Vec<u8>),
}

impl VerificationKey {
    /// Create an HMAC key from secret bytes
    pub fn hmac(secret: impl Into<Vec<u8>>) -> Self {
        VerificationKey::Hmac(secret.into())
    }

    /// Create an RSA key from big-endian modulus and exponent
    ///
    /// Leading zero bytes are stripped; some JWKS publishers pad the modulus.
    pub fn rsa(n: &[u8], e: &[u8]) -> Self {
        VerificationKey::Rsa {
            n: strip_leading_zeros(n).to_vec(),
            e: strip_leading_zeros(e).to_vec(),
        }
    }

    /// Create an ECDSA key from affine coordinates
    ///
    /// Returns `None` when a coordinate is longer than the curve allows.
    /// Shorter coordinates are left-padded with zeros.
    pub fn ecdsa(curve: EcdsaCurve, x: &[u8], y: &[u8]) -> Option<Self> {
        let len = curve.coordinate_len();
        if x.len() > len || y.len() > len {
            return None;
        }

        let mut point = Vec::with_capacity(1 + 2 * len);
        point.push(0x04);
        point.resize(1 + len - x.len(), 0);
        point.extend_from_slice(x);
        point.resize(1 + 2 * len - y.len(), 0);
        point.extend_from_slice(y);

        Some(VerificationKey::Ecdsa { curve, point })
    }

    /// Create an Ed25519 key from its raw public bytes
    pub fn ed25519(public_key: impl Into<Vec<u8>>) -> Self {
        VerificationKey::Ed25519(public_key.into())
    }

    /// Get key type name for logs
    pub fn key_type(&self) -> &'static str {
        match self {
            VerificationKey::Hmac(_) => "oct",
            VerificationKey::Rsa { .. } => "RSA",
            VerificationKey::Ecdsa { .. } => "EC",
            VerificationKey::Ed25519(_) => "OKP",
        }
    }

    /// Check whether this key can verify signatures of `algorithm`
    pub fn supports(&self, algorithm: AlgorithmId) -> bool {
        match (self, algorithm.family()) {
            (VerificationKey::Hmac(_), AlgorithmFamily::Hmac) => true,
            (VerificationKey::Rsa { .. }, AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss) => true,
            (VerificationKey::Ecdsa { curve, .. }, AlgorithmFamily::Ecdsa) => matches!(
                (curve, algorithm),
                (EcdsaCurve::P256, AlgorithmId::ES256) | (EcdsaCurve::P384, AlgorithmId::ES384)
            ),
            (VerificationKey::Ed25519(_), AlgorithmFamily::EdDsa) => true,
            _ => false,
        }
    }

    /// Verify `signature` over `signing_input` with this key
    ///
    /// A key that does not fit the algorithm yields
    /// [`Error::ErrorGeneratingSigner`]; a signature that does not verify
    /// yields [`Error::SignatureError`].
    pub fn verify(
        &self,
        algorithm: AlgorithmId,
        signing_input: &[u8],
        signature: &[u8],
    ) -> Result<()> {
        if !self.supports(algorithm) {
            return Err(Error::ErrorGeneratingSigner);
        }

        match self {
            VerificationKey::Hmac(secret) => {
                algorithm::hmac::verify(algorithm, signing_input, signature, secret)
            }
            VerificationKey::Rsa { n, e } => {
                algorithm::rsa::verify(algorithm, signing_input, signature, n, e)
            }
            VerificationKey::Ecdsa { curve, point } => {
                algorithm::ecdsa::verify(algorithm, *curve, signing_input, signature, point)
            }
            VerificationKey::Ed25519(public_key) => {
                algorithm::eddsa::verify(signing_input, signature, public_key)
            }
        }
    }
}

// Key material stays out of Debug output
impl std::fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationKey::Hmac(secret) => f
                .debug_struct("Hmac")
                .field("len", &secret.len())
                .finish(),
            VerificationKey::Rsa { n, .. } => f
                .debug_struct("Rsa")
                .field("bits", &(n.len() * 8))
                .finish(),
            VerificationKey::Ecdsa { curve, .. } => {
                f.debug_struct("Ecdsa").field("curve", curve).finish()
            }
            VerificationKey::Ed25519(_) => f.write_str("Ed25519"),
        }
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
