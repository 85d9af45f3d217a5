//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate with
//! size limit validation. Padding is rejected, as JWS requires.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Decode Base64URL string to bytes with maximum size limit
///
/// Every decoding failure is reported as [`Error::TokenMalformed`]; callers that
/// need a different error kind map it themselves.
pub fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    // Reject before decoding: 4 chars -> 3 bytes
    if input.len() / 4 * 3 > max_size {
        return Err(Error::TokenMalformed);
    }

    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| Error::TokenMalformed)?;

    if result.len() > max_size {
        return Err(Error::TokenMalformed);
    }

    Ok(result)
}

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}
