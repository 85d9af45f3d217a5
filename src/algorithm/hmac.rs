use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Verify an HS256/HS384/HS512 signature with constant-time comparison
///
/// `signing_input` is the exact `header.claims` text of the token.
pub fn verify(
    algorithm: AlgorithmId,
    signing_input: &[u8],
    signature: &[u8],
    secret: &[u8],
) -> Result<()> {
    let expected_signature = compute(algorithm, signing_input, secret)?;

    if signature.len() != expected_signature.len() {
        return Err(Error::SignatureError);
    }

    if constant_time_eq(signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureError)
    }
}

fn compute(algorithm: AlgorithmId, signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let tag = match algorithm {
        AlgorithmId::HS256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret)
                .map_err(|_| Error::ErrorGeneratingSigner)?;
            mac.update(signing_input);
            mac.finalize().into_bytes().to_vec()
        }
        AlgorithmId::HS384 => {
            let mut mac = Hmac::<Sha384>::new_from_slice(secret)
                .map_err(|_| Error::ErrorGeneratingSigner)?;
            mac.update(signing_input);
            mac.finalize().into_bytes().to_vec()
        }
        AlgorithmId::HS512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret)
                .map_err(|_| Error::ErrorGeneratingSigner)?;
            mac.update(signing_input);
            mac.finalize().into_bytes().to_vec()
        }
        _ => return Err(Error::ErrorGeneratingSigner),
    };

    Ok(tag)
}
