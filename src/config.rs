//! Verifier configuration
//!
//! A [`VerifierConfig`] is built in code or loaded from an already-read JSON
//! document:
//!
//! ```
//! use jwtverify::VerifierConfig;
//!
//! let config = VerifierConfig::from_json(
//!     r#"{"algorithms": ["HS256"], "claims": {"iss": "Tester"}}"#,
//! )?;
//! assert_eq!(config.claims.len(), 1);
//! # Ok::<(), jwtverify::Error>(())
//! ```

use crate::algorithm::{AlgorithmId, AlgorithmPolicy};
use crate::claims::ClaimValidators;
use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Long-lived, read-only verifier settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Accepted algorithms; every supported one when absent
    pub algorithms: AlgorithmPolicy,

    /// Claims that must hold specific values
    pub claims: ClaimValidators,
}

impl VerifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfiguration(e.to_string()))
    }

    /// Build a configuration from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidConfiguration(e.to_string()))
    }

    /// Restrict accepted algorithms
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = AlgorithmId>) -> Self {
        self.algorithms = AlgorithmPolicy::allow_only(algorithms.into_iter().collect());
        self
    }

    /// Replace the algorithm policy
    pub fn with_policy(mut self, policy: AlgorithmPolicy) -> Self {
        self.algorithms = policy;
        self
    }

    /// Require `claim` to equal `expected`
    pub fn require_claim(mut self, claim: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.claims.insert(claim, expected);
        self
    }

    /// Replace the claim validators
    pub fn with_claims(mut self, claims: ClaimValidators) -> Self {
        self.claims = claims;
        self
    }
}
