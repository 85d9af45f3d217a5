use crate::algorithm::{AlgorithmId, AlgorithmPolicy};
use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

use serde_json::{Map, Value};

/// Validated JWT header
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHeader {
    algorithm: AlgorithmId,
    token_type: Value,
    key_id: Option<Value>,
}

impl TokenHeader {
    /// Algorithm the token claims to be signed with
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Token type, when it is a string (typically "JWT")
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_str()
    }

    /// Raw `kid` header value
    ///
    /// Kept as JSON because a non-string `kid` is still a `kid`: it selects no
    /// key instead of falling back to "any key".
    pub fn key_id(&self) -> Option<&Value> {
        self.key_id.as_ref()
    }
}

/// Validate header shape and algorithm
///
/// `typ` and `alg` must both be present. `alg` must be a string naming a
/// supported algorithm that `policy` allows. The value of `typ` is not
/// inspected.
pub fn validate_header(header: &Map<String, Value>, policy: &AlgorithmPolicy) -> Result<TokenHeader> {
    let (token_type, alg) = match (header.get("typ"), header.get("alg")) {
        (Some(typ), Some(alg)) => (typ, alg),
        _ => return Err(Error::HeaderMissingFields),
    };

    let algorithm = match alg {
        Value::String(name) if name.len() <= MAX_ALG_LENGTH => AlgorithmId::from_str(name)?,
        Value::String(name) => {
            let mut shown: String = name.chars().take(MAX_ALG_LENGTH).collect();
            shown.push_str("...");
            return Err(Error::UnsupportedAlgorithm(shown));
        }
        other => return Err(Error::UnsupportedAlgorithm(other.to_string())),
    };

    policy.validate(&algorithm)?;

    Ok(TokenHeader {
        algorithm,
        token_type: token_type.clone(),
        key_id: header.get("kid").cloned(),
    })
}
