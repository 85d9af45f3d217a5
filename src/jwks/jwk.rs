//! JWK (JSON Web Key) struct and conversion

use crate::algorithm::ecdsa::EcdsaCurve;
use crate::algorithm::eddsa::ED25519_PUBLIC_KEY_LEN;
use crate::algorithm::{AlgorithmFamily, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::VerificationKey;
use crate::limits::{
    MAX_COORDINATE_SIZE, MAX_OCT_KEY_SIZE, MAX_RSA_EXPONENT_SIZE, MAX_RSA_MODULUS_SIZE,
};
use crate::utils::base64url;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Web Key (JWK) structure
///
/// All fields are optional to handle various JWK formats gracefully.
/// Validation happens during conversion to [`VerificationKey`], not during
/// parsing. Private members other than `d` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type ("RSA", "EC", "oct", "OKP")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,
    /// Key ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Algorithm the key is meant for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// Key use ("sig" or "enc")
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    // RSA fields
    /// RSA modulus (Base64URL-encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    /// RSA exponent (Base64URL-encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    // EC and OKP fields
    /// Curve name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    /// EC x coordinate or OKP public key (Base64URL-encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// EC y coordinate (Base64URL-encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    /// Private key component, tolerated and never used
    #[serde(skip_serializing)]
    pub d: Option<String>,
    // Symmetric field
    /// Shared secret (Base64URL-encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<String>,
}

impl Jwk {
    /// Check whether this entry may verify a token
    ///
    /// The key type must fit the algorithm family. When the token names a
    /// `kid` the entry must carry the same string; a non-string `kid` matches
    /// nothing. Declared `alg`, `use` and curve must agree with the token.
    pub fn matches(&self, algorithm: AlgorithmId, kid: Option<&Value>) -> bool {
        if self.kty.as_deref() != Some(algorithm.family().key_type()) {
            return false;
        }

        if let Some(kid) = kid {
            match (kid.as_str(), self.kid.as_deref()) {
                (Some(wanted), Some(have)) if wanted == have => {}
                _ => return false,
            }
        }

        if let Some(alg) = self.alg.as_deref() {
            if alg != algorithm.as_str() {
                return false;
            }
        }

        if let Some(key_use) = self.key_use.as_deref() {
            if key_use != "sig" {
                return false;
            }
        }

        match algorithm.curve() {
            Some(curve) => self.crv.as_deref() == Some(curve),
            None => true,
        }
    }

    /// Convert JWK to a verification key for `algorithm`
    ///
    /// Every failure (missing member, bad Base64URL, oversized or wrong-length
    /// material) is [`Error::ErrorGeneratingSigner`].
    pub fn to_key(&self, algorithm: AlgorithmId) -> Result<VerificationKey> {
        match algorithm.family() {
            AlgorithmFamily::Hmac => {
                let k = decode_member(self.k.as_deref(), MAX_OCT_KEY_SIZE)?;
                if k.is_empty() {
                    return Err(Error::ErrorGeneratingSigner);
                }
                Ok(VerificationKey::hmac(k))
            }
            AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss => {
                let n = decode_member(self.n.as_deref(), MAX_RSA_MODULUS_SIZE)?;
                let e = decode_member(self.e.as_deref(), MAX_RSA_EXPONENT_SIZE)?;
                Ok(VerificationKey::rsa(&n, &e))
            }
            AlgorithmFamily::Ecdsa => {
                let curve = self
                    .crv
                    .as_deref()
                    .and_then(EcdsaCurve::from_name)
                    .ok_or(Error::ErrorGeneratingSigner)?;
                let x = decode_member(self.x.as_deref(), MAX_COORDINATE_SIZE)?;
                let y = decode_member(self.y.as_deref(), MAX_COORDINATE_SIZE)?;
                VerificationKey::ecdsa(curve, &x, &y).ok_or(Error::ErrorGeneratingSigner)
            }
            AlgorithmFamily::EdDsa => {
                let x = decode_member(self.x.as_deref(), MAX_COORDINATE_SIZE)?;
                if x.len() != ED25519_PUBLIC_KEY_LEN {
                    return Err(Error::ErrorGeneratingSigner);
                }
                Ok(VerificationKey::ed25519(x))
            }
        }
    }
}

fn decode_member(member: Option<&str>, max_size: usize) -> Result<Vec<u8>> {
    let encoded = member.ok_or(Error::ErrorGeneratingSigner)?;
    base64url::decode_bytes(encoded, max_size).map_err(|_| Error::ErrorGeneratingSigner)
}
