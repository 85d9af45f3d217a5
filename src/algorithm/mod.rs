//! Supported signature algorithms and the allow-list policy
//!
//! Every algorithm named in a token header is parsed into an [`AlgorithmId`].
//! Parsing is the allow-list: names outside the supported set never produce an
//! identifier. [`AlgorithmPolicy`] narrows the set further per verifier.

pub mod ecdsa;
pub mod eddsa;
pub mod hmac;
pub mod rsa;

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Algorithm identifier from JWT header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSA PKCS#1 v1.5 with SHA-256
    RS256,

    /// RSA PKCS#1 v1.5 with SHA-384
    RS384,

    /// RSA PKCS#1 v1.5 with SHA-512
    RS512,

    /// RSA-PSS with SHA-256
    PS256,

    /// RSA-PSS with SHA-384
    PS384,

    /// RSA-PSS with SHA-512
    PS512,

    /// ECDSA with P-256 and SHA-256
    ES256,

    /// ECDSA with P-384 and SHA-384
    ES384,

    /// Ed25519
    EdDSA,
}

/// Key family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    Hmac,
    Rsa,
    RsaPss,
    Ecdsa,
    EdDsa,
}

impl AlgorithmFamily {
    /// JWK `kty` value carrying keys for this family
    pub fn key_type(&self) -> &'static str {
        match self {
            AlgorithmFamily::Hmac => "oct",
            AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss => "RSA",
            AlgorithmFamily::Ecdsa => "EC",
            AlgorithmFamily::EdDsa => "OKP",
        }
    }
}

/// Every algorithm this crate can verify
pub const SUPPORTED_ALGORITHMS: [AlgorithmId; 12] = [
    AlgorithmId::HS256,
    AlgorithmId::HS384,
    AlgorithmId::HS512,
    AlgorithmId::RS256,
    AlgorithmId::RS384,
    AlgorithmId::RS512,
    AlgorithmId::PS256,
    AlgorithmId::PS384,
    AlgorithmId::PS512,
    AlgorithmId::ES256,
    AlgorithmId::ES384,
    AlgorithmId::EdDSA,
];

impl AlgorithmId {
    /// Parse algorithm string from JWT header
    ///
    /// `none`, `ES512` and every unknown name are rejected with
    /// [`Error::UnsupportedAlgorithm`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),

            "RS256" => Ok(AlgorithmId::RS256),
            "RS384" => Ok(AlgorithmId::RS384),
            "RS512" => Ok(AlgorithmId::RS512),

            "PS256" => Ok(AlgorithmId::PS256),
            "PS384" => Ok(AlgorithmId::PS384),
            "PS512" => Ok(AlgorithmId::PS512),

            "ES256" => Ok(AlgorithmId::ES256),
            "ES384" => Ok(AlgorithmId::ES384),

            "EdDSA" => Ok(AlgorithmId::EdDSA),

            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",
            AlgorithmId::RS256 => "RS256",
            AlgorithmId::RS384 => "RS384",
            AlgorithmId::RS512 => "RS512",
            AlgorithmId::PS256 => "PS256",
            AlgorithmId::PS384 => "PS384",
            AlgorithmId::PS512 => "PS512",
            AlgorithmId::ES256 => "ES256",
            AlgorithmId::ES384 => "ES384",
            AlgorithmId::EdDSA => "EdDSA",
        }
    }

    /// Key family used to resolve a verification key
    pub fn family(&self) -> AlgorithmFamily {
        match self {
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512 => AlgorithmFamily::Hmac,
            AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512 => AlgorithmFamily::Rsa,
            AlgorithmId::PS256 | AlgorithmId::PS384 | AlgorithmId::PS512 => {
                AlgorithmFamily::RsaPss
            }
            AlgorithmId::ES256 | AlgorithmId::ES384 => AlgorithmFamily::Ecdsa,
            AlgorithmId::EdDSA => AlgorithmFamily::EdDsa,
        }
    }

    /// Curve name a JWK must declare for this algorithm, if any
    pub fn curve(&self) -> Option<&'static str> {
        match self {
            AlgorithmId::ES256 => Some("P-256"),
            AlgorithmId::ES384 => Some("P-384"),
            AlgorithmId::EdDSA => Some("Ed25519"),
            _ => None,
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        self.family() == AlgorithmFamily::Hmac
    }

    /// Check if algorithm is asymmetric (RSA/ECDSA/EdDSA)
    pub fn is_asymmetric(&self) -> bool {
        !self.is_symmetric()
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AlgorithmId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlgorithmId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        AlgorithmId::from_str(&name).map_err(serde::de::Error::custom)
    }
}

/// Policy for allowed algorithms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmPolicy {
    allowed: Vec<AlgorithmId>,
}

impl AlgorithmPolicy {
    /// Create a policy that allows only specific algorithms
    pub fn allow_only(algorithms: Vec<AlgorithmId>) -> Self {
        Self {
            allowed: algorithms,
        }
    }

    /// Create a policy that allows every supported algorithm
    pub fn allow_all() -> Self {
        Self::allow_only(SUPPORTED_ALGORITHMS.to_vec())
    }

    /// Policy that allows only HS256
    pub fn hs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS256])
    }

    /// Policy that allows any HMAC algorithm (HS256, HS384, HS512)
    ///
    /// # Security Warning
    ///
    /// Using multiple HMAC variants with the same key is not recommended.
    /// Prefer [`hs256_only()`](Self::hs256_only) when the issuer is known.
    pub fn hmac_any() -> Self {
        Self::allow_only(vec![
            AlgorithmId::HS256,
            AlgorithmId::HS384,
            AlgorithmId::HS512,
        ])
    }

    /// Policy that allows only RS256
    pub fn rs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::RS256])
    }

    /// Policy that allows any asymmetric algorithm
    ///
    /// Rejects HMAC tokens outright, which closes the classic RSA public key
    /// as HMAC secret confusion.
    pub fn asymmetric_only() -> Self {
        Self::allow_only(
            SUPPORTED_ALGORITHMS
                .iter()
                .copied()
                .filter(AlgorithmId::is_asymmetric)
                .collect(),
        )
    }

    /// Check if an algorithm is allowed
    pub fn is_allowed(&self, algorithm: &AlgorithmId) -> bool {
        self.allowed.contains(algorithm)
    }

    /// Validate algorithm against policy
    pub fn validate(&self, algorithm: &AlgorithmId) -> Result<()> {
        if self.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(Error::UnsupportedAlgorithm(algorithm.to_string()))
        }
    }

    /// Get list of allowed algorithms
    pub fn allowed_algorithms(&self) -> &[AlgorithmId] {
        &self.allowed
    }
}

impl Default for AlgorithmPolicy {
    fn default() -> Self {
        Self::allow_all()
    }
}
