use crate::claims::Claims;
use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the expiration claim
pub const EXPIRATION_CLAIM: &str = "exp";

/// Required claim values, checked in insertion order
///
/// ```
/// use jwtverify::ClaimValidators;
///
/// let validators = ClaimValidators::new()
///     .require("iss", "Tester")
///     .require("aud", "www.test.com");
/// assert_eq!(validators.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimValidators {
    expected: Map<String, Value>,
}

impl ClaimValidators {
    /// Create an empty set: no claim checks beyond `exp`
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `claim` to equal `expected`
    ///
    /// Requiring the same claim twice keeps its original position and replaces
    /// the expected value.
    pub fn require(mut self, claim: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.insert(claim, expected);
        self
    }

    /// Require `claim` to equal `expected`, in place
    pub fn insert(&mut self, claim: impl Into<String>, expected: impl Into<Value>) {
        self.expected.insert(claim.into(), expected.into());
    }

    /// Expected value for `claim`
    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.expected.get(claim)
    }

    /// Iterate `(claim, expected)` pairs in the order they are checked
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.expected.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}

impl From<Map<String, Value>> for ClaimValidators {
    fn from(expected: Map<String, Value>) -> Self {
        Self { expected }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClaimValidators {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut validators = Self::new();
        for (claim, expected) in iter {
            validators.insert(claim, expected);
        }
        validators
    }
}

/// Validate expiration and required claim values
///
/// Expiration is checked first. A present `exp` must be a number strictly
/// greater than `now`; a non-numeric `exp` counts as expired. Absent `exp` is
/// accepted. Then each configured claim must equal its expected value exactly
/// (JSON equality, so `1` and `1.0` differ). An absent claim compares as `null`.
pub fn validate_claims(claims: &Claims, now: i64, validators: &ClaimValidators) -> Result<()> {
    if let Some(exp) = claims.get(EXPIRATION_CLAIM) {
        if is_expired(exp, now) {
            return Err(Error::Expired {
                now,
                claim: EXPIRATION_CLAIM.to_string(),
                value: exp.clone(),
            });
        }
    }

    for (claim, expected) in validators.iter() {
        let actual = claims.get(claim).unwrap_or(&Value::Null);
        if actual != expected {
            return Err(Error::ClaimMismatch {
                claim: claim.to_string(),
                value: actual.clone(),
            });
        }
    }

    Ok(())
}

fn is_expired(exp: &Value, now: i64) -> bool {
    if let Some(exp) = exp.as_i64() {
        return exp <= now;
    }
    match exp.as_f64() {
        Some(exp) => exp <= now as f64,
        None => true,
    }
}
