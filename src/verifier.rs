//! The verification pipeline
//!
//! [`Verifier::verify`] runs four stages strictly in order and stops at the
//! first failure:
//!
//! 1. [`token::decode`] splits and decodes the compact token
//! 2. [`token::validate_header`] checks `typ`/`alg` and the algorithm policy
//! 3. [`jwks::resolve_key`] picks the static secret or a JWKS entry
//! 4. [`Verifier::verify_signature_and_claims`] checks the signature, then
//!    `exp` against the clock, then the configured claim values

use crate::algorithm::{AlgorithmId, AlgorithmPolicy};
use crate::claims::{self, ClaimValidators, Claims};
use crate::clock::{Clock, SystemClock};
use crate::config::VerifierConfig;
use crate::error::Result;
use crate::jwks::{self, JwkSet};
use crate::keys::VerificationKey;
use crate::token::{self, DecodedToken};

use serde_json::Value;

/// Verifies compact JWTs
///
/// Holds only read-only configuration and the clock, so one verifier can be
/// shared across threads and used for any number of calls.
///
/// ```
/// use jwtverify::{FrozenClock, Verifier, VerifierConfig};
///
/// let verifier = Verifier::with_clock(VerifierConfig::default(), FrozenClock::at(0));
/// let result = verifier.verify("not-a-token", b"secret", None);
/// assert!(matches!(result, Err(jwtverify::Error::TokenMalformed)));
/// ```
#[derive(Debug, Clone)]
pub struct Verifier<C = SystemClock> {
    config: VerifierConfig,
    clock: C,
}

impl Verifier<SystemClock> {
    /// Verifier reading wall clock time
    pub fn new(config: VerifierConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Verifier<SystemClock> {
    fn default() -> Self {
        Self::new(VerifierConfig::default())
    }
}

impl<C: Clock> Verifier<C> {
    /// Verifier reading time from `clock`
    pub fn with_clock(config: VerifierConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn policy(&self) -> &AlgorithmPolicy {
        &self.config.algorithms
    }

    pub fn claim_validators(&self) -> &ClaimValidators {
        &self.config.claims
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Verify `token` and return its claims
    ///
    /// `secret` is the shared HMAC secret; pass an empty slice when none is
    /// configured. `jwks` supplies keys for asymmetric algorithms and, when no
    /// secret is configured, for HMAC.
    pub fn verify(&self, token: &str, secret: &[u8], jwks: Option<&JwkSet>) -> Result<Claims> {
        let decoded = token::decode(token).inspect_err(|e| {
            tracing::debug!(error = %e, "token decoding failed");
        })?;
        self.verify_decoded(decoded, secret, jwks)
    }

    /// Verify a token held in a JSON value
    ///
    /// Fails with [`Error::NotAString`](crate::Error::NotAString) unless the
    /// value is a JSON string.
    pub fn verify_value(
        &self,
        token: &Value,
        secret: &[u8],
        jwks: Option<&JwkSet>,
    ) -> Result<Claims> {
        let decoded = token::decode_value(token).inspect_err(|e| {
            tracing::debug!(error = %e, "token decoding failed");
        })?;
        self.verify_decoded(decoded, secret, jwks)
    }

    fn verify_decoded(
        &self,
        decoded: DecodedToken,
        secret: &[u8],
        jwks: Option<&JwkSet>,
    ) -> Result<Claims> {
        let header = token::validate_header(decoded.header(), self.policy()).inspect_err(|e| {
            tracing::debug!(error = %e, "header validation failed");
        })?;

        let algorithm = header.algorithm();
        let key = jwks::resolve_key(algorithm, header.key_id(), secret, jwks)?;

        self.verify_signature_and_claims(decoded, &key, algorithm)
    }

    /// Final stage: signature, then expiration, then configured claims
    ///
    /// Claims are only looked at once the signature holds.
    pub fn verify_signature_and_claims(
        &self,
        decoded: DecodedToken,
        key: &VerificationKey,
        algorithm: AlgorithmId,
    ) -> Result<Claims> {
        key.verify(algorithm, decoded.signing_input().as_bytes(), decoded.signature())
            .inspect_err(|e| {
                tracing::debug!(%algorithm, error = %e, "signature verification failed");
            })?;

        let now = self.clock.current_time();
        claims::validate_claims(decoded.claims(), now, &self.config.claims).inspect_err(|e| {
            tracing::debug!(%algorithm, error = %e, "claim validation failed");
        })?;

        tracing::trace!(%algorithm, "token verified");
        Ok(decoded.into_claims())
    }
}
