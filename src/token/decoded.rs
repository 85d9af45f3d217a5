use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::limits::{
    MAX_DECODED_CLAIMS_SIZE, MAX_DECODED_HEADER_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::utils::base64url;

use serde_json::{Map, Value};

/// A JWT split into its three segments and decoded, but not yet trusted
///
/// Nothing in here has been checked against a key. The original segment text is
/// kept because the signature covers the exact bytes the issuer produced, not a
/// re-serialization of the decoded JSON.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    signing_input: String,
    header_len: usize,
    header: Map<String, Value>,
    claims: Claims,
    signature: Vec<u8>,
}

impl DecodedToken {
    /// Raw Base64URL header segment
    pub fn header_segment(&self) -> &str {
        &self.signing_input[..self.header_len]
    }

    /// Raw Base64URL claims segment
    pub fn claims_segment(&self) -> &str {
        &self.signing_input[self.header_len + 1..]
    }

    /// The `header.claims` text the signature was computed over
    pub fn signing_input(&self) -> &str {
        &self.signing_input
    }

    /// Decoded header object
    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// Decoded claims object
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Raw signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Consume the token, keeping only the claims
    pub fn into_claims(self) -> Claims {
        self.claims
    }
}

/// Decode a compact JWT string
///
/// # Errors
///
/// - [`Error::TokenMalformed`] when the token is oversized, does not have
///   exactly three segments, or a segment is not valid Base64URL/JSON
/// - [`Error::HeaderNotAMap`] / [`Error::ClaimsNotAMap`] when a segment holds
///   valid JSON that is not an object
pub fn decode(token: &str) -> Result<DecodedToken> {
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::TokenMalformed);
    }

    let mut parts = token.split('.');
    let (header_b64, claims_b64, signature_b64) =
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(c), Some(s), None) => (h, c, s),
            _ => return Err(Error::TokenMalformed),
        };

    let header = match decode_json(header_b64, MAX_DECODED_HEADER_SIZE)? {
        Value::Object(map) => map,
        _ => return Err(Error::HeaderNotAMap),
    };

    let claims = match decode_json(claims_b64, MAX_DECODED_CLAIMS_SIZE)? {
        Value::Object(map) => map,
        _ => return Err(Error::ClaimsNotAMap),
    };

    let signature = base64url::decode_bytes(signature_b64, MAX_DECODED_SIGNATURE_SIZE)?;

    Ok(DecodedToken {
        signing_input: format!("{header_b64}.{claims_b64}"),
        header_len: header_b64.len(),
        header,
        claims,
        signature,
    })
}

/// Decode a token held in an arbitrary JSON value
///
/// Anything but a JSON string fails with [`Error::NotAString`].
pub fn decode_value(token: &Value) -> Result<DecodedToken> {
    match token {
        Value::String(token) => decode(token),
        _ => Err(Error::NotAString),
    }
}

fn decode_json(segment: &str, max_size: usize) -> Result<Value> {
    let bytes = base64url::decode_bytes(segment, max_size)?;
    serde_json::from_slice(&bytes).map_err(|_| Error::TokenMalformed)
}
