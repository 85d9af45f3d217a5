//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded JWT header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded JWT claims JSON (64KB)
pub(crate) const MAX_DECODED_CLAIMS_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// RSA-8192 signatures are 1024 bytes, everything else is smaller
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Maximum length for the algorithm (alg) header field (16 bytes)
pub(crate) const MAX_ALG_LENGTH: usize = 16;

/// Maximum size for a decoded RSA modulus (1KB, 8192 bits)
pub(crate) const MAX_RSA_MODULUS_SIZE: usize = 1024;

/// Maximum size for a decoded RSA exponent
pub(crate) const MAX_RSA_EXPONENT_SIZE: usize = 16;

/// Maximum size for a decoded symmetric JWK secret (`k`)
pub(crate) const MAX_OCT_KEY_SIZE: usize = 1024;

/// Maximum size for a decoded EC or OKP coordinate
pub(crate) const MAX_COORDINATE_SIZE: usize = 66;
