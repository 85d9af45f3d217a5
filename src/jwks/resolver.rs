//! Verification key selection

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::jwks::{Jwk, JwkSet};
use crate::keys::VerificationKey;

use serde_json::Value;

/// Resolve the key for a token from the static secret or a JWKS
///
/// HMAC algorithms prefer an `oct` entry in `jwks` matched by the header
/// `kid`; without such an entry the non-empty `static_secret` is the key. An
/// empty secret means none is configured, and a `kid`-less HMAC token then
/// takes the first `oct` entry. Every other algorithm needs a JWKS entry
/// accepted by [`Jwk::matches`](crate::Jwk::matches).
///
/// When several entries match, the first wins.
///
/// # Errors
///
/// [`Error::ErrorGeneratingSigner`] when no usable key exists, whatever the
/// reason.
pub fn resolve_key(
    algorithm: AlgorithmId,
    kid: Option<&Value>,
    static_secret: &[u8],
    jwks: Option<&JwkSet>,
) -> Result<VerificationKey> {
    if algorithm.is_symmetric() && !static_secret.is_empty() {
        if let (Some(_), Some(jwks)) = (kid, jwks) {
            if let Some(jwk) = first_match(jwks, algorithm, kid) {
                let key = jwk.to_key(algorithm)?;
                tracing::trace!(%algorithm, kid = ?kid, "using oct entry from JWKS");
                return Ok(key);
            }
        }

        tracing::trace!(%algorithm, "using static secret");
        return Ok(VerificationKey::hmac(static_secret));
    }

    let Some(jwks) = jwks else {
        tracing::debug!(%algorithm, "no key source for algorithm");
        return Err(Error::ErrorGeneratingSigner);
    };

    let Some(jwk) = first_match(jwks, algorithm, kid) else {
        tracing::debug!(%algorithm, kid = ?kid, "no matching key in JWKS");
        return Err(Error::ErrorGeneratingSigner);
    };

    let key = jwk.to_key(algorithm)?;
    tracing::trace!(%algorithm, key_type = key.key_type(), "resolved key from JWKS");
    Ok(key)
}

fn first_match<'a>(jwks: &'a JwkSet, algorithm: AlgorithmId, kid: Option<&Value>) -> Option<&'a Jwk> {
    let mut candidates = jwks.keys.iter().filter(|k| k.matches(algorithm, kid));
    let jwk = candidates.next()?;

    if kid.is_some() && candidates.next().is_some() {
        tracing::warn!(%algorithm, kid = ?kid, "multiple JWKS entries share kid, using first match");
    }

    Some(jwk)
}
