//! # jwtverify - Deterministic JWT Verification
//!
//! > Verify JSON Web Tokens against a static secret or a JSON Web Key Set.
//!
//! **jwtverify** checks compact JWTs: it decodes the three segments, validates
//! the header, selects a key, verifies the signature and then checks `exp` and
//! any required claim values. "Now" comes from an injected [`Clock`], so
//! expiration behaves the same on every run of a test suite.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtverify::*;
//!
//! let verifier = Verifier::new(
//!     VerifierConfig::new()
//!         .require_claim("iss", "Tester")
//!         .require_claim("aud", "www.test.com"),
//! );
//!
//! let claims = verifier.verify(token_str, b"shared-secret", Some(&jwks))?;
//! println!("Subject: {:?}", claims.get("sub"));
//! ```
//!
//! ## Verification Flow
//!
//! ```text
//! &str
//!     │ token::decode
//!     ▼
//! DecodedToken (segments decoded; untrusted)
//!     │ token::validate_header
//!     ▼
//! TokenHeader (typ/alg present, algorithm allowed)
//!     │ jwks::resolve_key
//!     ▼
//! VerificationKey (static secret or JWKS entry)
//!     │ Verifier::verify_signature_and_claims
//!     ▼
//! Claims
//! ```
//!
//! Each stage is public and can be driven separately. The first failure ends
//! the call; nothing retries.
//!
//! ## Algorithm Support
//!
//! - **HMAC**: HS256, HS384, HS512
//! - **RSA PKCS#1 v1.5**: RS256, RS384, RS512
//! - **RSA-PSS**: PS256, PS384, PS512
//! - **ECDSA**: ES256, ES384
//! - **EdDSA**: Ed25519
//!
//! `none` and every other name are rejected with
//! [`Error::UnsupportedAlgorithm`]. Restrict the set further with
//! [`AlgorithmPolicy`].
//!
//! ## Key Selection
//!
//! - HMAC tokens whose `kid` matches a JWKS `oct` entry use that entry's key
//!   instead of the static secret. Otherwise the static secret is the key; when
//!   it is empty, the first matching `oct` entry supplies it.
//! - Asymmetric tokens need a JWKS entry whose `kty` fits the algorithm and
//!   whose `kid` equals the header `kid` when the header has one.
//! - No usable key is always [`Error::ErrorGeneratingSigner`].
//!
//! ## Features
//!
//! - **`ring`** (default): RSA, ECDSA and EdDSA verification with `ring`
//! - **`aws-lc-rs`**: Use `aws-lc-rs` instead; combine with
//!   `default-features = false` so `ring` is not built
//!
//! ## Security
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//!
//! ### Algorithm Confusion Prevention
//!
//! An RSA or EC key is never used as an HMAC secret, and a static secret never
//! satisfies an asymmetric algorithm.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517) - JSON Web Key (JWK)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)
//! - [RFC 8037](https://datatracker.ietf.org/doc/html/rfc8037) - EdDSA in JOSE

#[cfg(not(any(feature = "ring", feature = "aws-lc-rs")))]
compile_error!("enable either the `ring` or the `aws-lc-rs` feature");

// Core modules
pub mod clock;
pub mod config;
pub mod error;
mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Pipeline stages
pub mod claims;
pub mod jwks;
pub mod token;

// Verifier (main public API)
pub mod verifier;

// ============================================================================
// PUBLIC API
// ============================================================================

// Main verification types
pub use config::VerifierConfig;
pub use verifier::Verifier;

// Time sources
pub use clock::{Clock, FrozenClock, SystemClock};

// Supporting types for advanced usage
pub use algorithm::{AlgorithmFamily, AlgorithmId, AlgorithmPolicy};
pub use claims::{ClaimValidators, Claims};
pub use error::{ClaimFailure, Error, Result};
pub use jwks::{Jwk, JwkSet};
pub use keys::VerificationKey;
pub use token::{DecodedToken, TokenHeader};

// Re-export curve type for ECDSA keys
pub use algorithm::ecdsa::EcdsaCurve;
