use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};

// Select crypto backend based on features
#[cfg(feature = "aws-lc-rs")]
use aws_lc_rs::signature::{self, UnparsedPublicKey};
#[cfg(not(feature = "aws-lc-rs"))]
use ring::signature::{self, UnparsedPublicKey};

/// Elliptic curves usable with ECDSA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// NIST P-256
    P256,
    /// NIST P-384
    P384,
}

impl EcdsaCurve {
    /// Curve for a JWK `crv` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "P-256" => Some(EcdsaCurve::P256),
            "P-384" => Some(EcdsaCurve::P384),
            _ => None,
        }
    }

    /// Byte length of one affine coordinate
    pub fn coordinate_len(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 32,
            EcdsaCurve::P384 => 48,
        }
    }
}

/// Verify an ES256/ES384 signature
///
/// `point` is the uncompressed SEC1 public point (`0x04 || x || y`) and
/// `signature` the fixed-width `r || s` concatenation JWS uses.
pub fn verify(
    algorithm: AlgorithmId,
    curve: EcdsaCurve,
    signing_input: &[u8],
    signature: &[u8],
    point: &[u8],
) -> Result<()> {
    let verification: &'static dyn signature::VerificationAlgorithm = match (algorithm, curve) {
        (AlgorithmId::ES256, EcdsaCurve::P256) => &signature::ECDSA_P256_SHA256_FIXED,
        (AlgorithmId::ES384, EcdsaCurve::P384) => &signature::ECDSA_P384_SHA384_FIXED,
        _ => return Err(Error::ErrorGeneratingSigner),
    };

    let public_key = UnparsedPublicKey::new(verification, point);

    public_key
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureError)
}
