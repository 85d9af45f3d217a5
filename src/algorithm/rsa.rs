use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};

// Select crypto backend based on features
#[cfg(feature = "aws-lc-rs")]
use aws_lc_rs::signature::{self, RsaParameters, RsaPublicKeyComponents};
#[cfg(not(feature = "aws-lc-rs"))]
use ring::signature::{self, RsaParameters, RsaPublicKeyComponents};

/// Verify an RS* or PS* signature against a public key given as big-endian
/// modulus and exponent
pub fn verify(
    algorithm: AlgorithmId,
    signing_input: &[u8],
    signature: &[u8],
    n: &[u8],
    e: &[u8],
) -> Result<()> {
    let params = parameters(algorithm)?;

    let public_key = RsaPublicKeyComponents { n, e };

    public_key
        .verify(params, signing_input, signature)
        .map_err(|_| Error::SignatureError)
}

fn parameters(algorithm: AlgorithmId) -> Result<&'static RsaParameters> {
    match algorithm {
        AlgorithmId::RS256 => Ok(&signature::RSA_PKCS1_2048_8192_SHA256),
        AlgorithmId::RS384 => Ok(&signature::RSA_PKCS1_2048_8192_SHA384),
        AlgorithmId::RS512 => Ok(&signature::RSA_PKCS1_2048_8192_SHA512),
        AlgorithmId::PS256 => Ok(&signature::RSA_PSS_2048_8192_SHA256),
        AlgorithmId::PS384 => Ok(&signature::RSA_PSS_2048_8192_SHA384),
        AlgorithmId::PS512 => Ok(&signature::RSA_PSS_2048_8192_SHA512),
        _ => Err(Error::ErrorGeneratingSigner),
    }
}
