//! JWKS (JSON Web Key Set) document

use crate::error::{Error, Result};
use crate::jwks::Jwk;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Web Key Set
///
/// Parsed from an already-fetched document; this crate never retrieves keys
/// itself.
///
/// ```
/// use jwtverify::JwkSet;
///
/// let jwks = JwkSet::from_json(r#"{"keys": [{"kty": "oct", "kid": "k1", "k": "c2VjcmV0"}]}"#)?;
/// assert_eq!(jwks.keys.len(), 1);
/// # Ok::<(), jwtverify::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwkSet {
    /// Keys in document order
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Create a set from keys
    pub fn new(keys: Vec<Jwk>) -> Self {
        Self { keys }
    }

    /// Parse a JWKS JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidJwks(e.to_string()))
    }

    /// Build a set from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidJwks(e.to_string()))
    }

    /// First key carrying `kid`
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.kid.as_deref() == Some(kid))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<Jwk> for JwkSet {
    fn from_iter<I: IntoIterator<Item = Jwk>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
