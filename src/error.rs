//! Error types for JWT verification
//!
//! Every stage of the verification pipeline reports failure through the flat
//! [`Error`] enum. Errors are terminal for the call that produced them; nothing
//! in this crate retries or recovers.
//!
//! The two claim failures carry data rather than a fixed message. Use
//! [`Error::failure`] to obtain the structured `{message, claim, claim_val}`
//! payload callers usually forward to clients.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Message carried by a failed claim equality check
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Errors produced while verifying a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Token must be a string")]
    NotAString,

    #[error("Malformed token: expected three Base64URL encoded JSON segments separated by '.'")]
    TokenMalformed,

    #[error("Token header is not a JSON object")]
    HeaderNotAMap,

    #[error("Token claims are not a JSON object")]
    ClaimsNotAMap,

    // ============================================================================
    // Header Errors
    // ============================================================================
    #[error("Token header must contain both 'typ' and 'alg'")]
    HeaderMissingFields,

    #[error("Algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    // ============================================================================
    // Key and Signature Errors
    // ============================================================================
    #[error("No usable verification key for the token algorithm")]
    ErrorGeneratingSigner,

    #[error("Signature verification failed")]
    SignatureError,

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Token expired: claim '{claim}' is {value} (now: {now})")]
    Expired {
        now: i64,
        claim: String,
        value: Value,
    },

    #[error("Invalid token: claim '{claim}' has unexpected value {value}")]
    ClaimMismatch { claim: String, value: Value },

    // ============================================================================
    // Input Document Errors
    // ============================================================================
    #[error("Invalid JWKS document: {0}")]
    InvalidJwks(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Structured payload for claim failures
    ///
    /// Returns `None` for every error that is not a claim failure.
    pub fn failure(&self) -> Option<ClaimFailure> {
        match self {
            Error::Expired { now, claim, value } => Some(ClaimFailure {
                message: Value::from(*now),
                claim: claim.clone(),
                claim_val: value.clone(),
            }),
            Error::ClaimMismatch { claim, value } => Some(ClaimFailure {
                message: Value::from(INVALID_TOKEN_MESSAGE),
                claim: claim.clone(),
                claim_val: value.clone(),
            }),
            _ => None,
        }
    }
}

/// Data describing a rejected claim
///
/// For expiration failures `message` holds the clock's current time; for
/// equality failures it holds `"Invalid token"`. `claim_val` is always the value
/// found in the token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimFailure {
    pub message: Value,
    pub claim: String,
    pub claim_val: Value,
}

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, Error>;
