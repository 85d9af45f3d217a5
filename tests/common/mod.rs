//! Token minting helpers shared by the integration tests

#![allow(dead_code)]

use std::sync::OnceLock;

use hmac::{Hmac, Mac};
use jwtverify::utils::base64url;
use jwtverify::EcdsaCurve;
use ring::rand::SystemRandom;
use ring::signature::{
    EcdsaKeyPair, Ed25519KeyPair, KeyPair, RsaEncoding, RsaKeyPair,
    ECDSA_P256_SHA256_FIXED_SIGNING, ECDSA_P384_SHA384_FIXED_SIGNING, RSA_PKCS1_SHA256,
    RSA_PKCS1_SHA384, RSA_PKCS1_SHA512, RSA_PSS_SHA256, RSA_PSS_SHA384, RSA_PSS_SHA512,
};
use serde_json::{json, Value};
use sha2::{Sha256, Sha384, Sha512};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fixed "now" used with `FrozenClock` throughout the tests
pub const NOW: i64 = 1_700_000_000;

pub const SECRET: &[u8] = b"test-secret-key-for-hmac-tokens";

// ============================================================================
// Logging
// ============================================================================

/// Route the verifier's stage logs to the test output, once per test binary
///
/// `RUST_LOG` overrides the default `jwtverify=trace` filter.
pub fn init_tracing() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "jwtverify=trace".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

// ============================================================================
// Token assembly
// ============================================================================

pub fn segment(value: &Value) -> String {
    base64url::encode(&value.to_string())
}

/// Build `header.claims.signature`, signing the exact segment text
pub fn build_token(header: &Value, claims: &Value, sign: impl FnOnce(&[u8]) -> Vec<u8>) -> String {
    let signing_input = format!("{}.{}", segment(header), segment(claims));
    let signature = sign(signing_input.as_bytes());
    format!("{}.{}", signing_input, base64url::encode_bytes(signature))
}

pub fn header(alg: &str, kid: Option<&str>) -> Value {
    match kid {
        Some(kid) => json!({"alg": alg, "typ": "JWT", "kid": kid}),
        None => json!({"alg": alg, "typ": "JWT"}),
    }
}

/// Flip one bit in the decoded signature
pub fn tamper_signature(token: &str) -> String {
    let (signing_input, signature_b64) = token.rsplit_once('.').unwrap();
    let mut signature = base64url::decode_bytes(signature_b64, 4096).unwrap();
    let middle = signature.len() / 2;
    signature[middle] ^= 0x01;
    format!("{}.{}", signing_input, base64url::encode_bytes(signature))
}

// ============================================================================
// HMAC
// ============================================================================

pub fn hmac_sign(alg: &str, data: &[u8], secret: &[u8]) -> Vec<u8> {
    match alg {
        "HS256" => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        "HS384" => {
            let mut mac = Hmac::<Sha384>::new_from_slice(secret).unwrap();
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        "HS512" => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret).unwrap();
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        other => panic!("not an HMAC algorithm: {other}"),
    }
}

pub fn hmac_token(alg: &str, claims: &Value, secret: &[u8]) -> String {
    build_token(&header(alg, None), claims, |data| hmac_sign(alg, data, secret))
}

pub fn oct_jwk(kid: &str, secret: &[u8]) -> Value {
    json!({"kty": "oct", "kid": kid, "k": base64url::encode_bytes(secret)})
}

// ============================================================================
// RSA
// ============================================================================

pub struct RsaTestKey {
    pub keypair: RsaKeyPair,
    pub n: Vec<u8>,
    pub e: Vec<u8>,
}

fn generate_rsa_key() -> RsaTestKey {
    use rsa::{pkcs8::EncodePrivateKey, traits::PublicKeyParts, RsaPrivateKey};

    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
    let pkcs8 = private_key
        .to_pkcs8_der()
        .expect("Failed to serialize to PKCS#8");
    let keypair = RsaKeyPair::from_pkcs8(pkcs8.as_bytes()).expect("Failed to load key");

    RsaTestKey {
        keypair,
        n: private_key.n().to_bytes_be(),
        e: private_key.e().to_bytes_be(),
    }
}

/// Shared RSA key; generation is slow so each test binary makes it once
pub fn rsa_key() -> &'static RsaTestKey {
    static KEY: OnceLock<RsaTestKey> = OnceLock::new();
    KEY.get_or_init(generate_rsa_key)
}

/// A second, unrelated RSA key
pub fn other_rsa_key() -> &'static RsaTestKey {
    static KEY: OnceLock<RsaTestKey> = OnceLock::new();
    KEY.get_or_init(generate_rsa_key)
}

fn rsa_encoding(alg: &str) -> &'static dyn RsaEncoding {
    match alg {
        "RS256" => &RSA_PKCS1_SHA256,
        "RS384" => &RSA_PKCS1_SHA384,
        "RS512" => &RSA_PKCS1_SHA512,
        "PS256" => &RSA_PSS_SHA256,
        "PS384" => &RSA_PSS_SHA384,
        "PS512" => &RSA_PSS_SHA512,
        other => panic!("not an RSA algorithm: {other}"),
    }
}

pub fn rsa_sign(alg: &str, data: &[u8], key: &RsaTestKey) -> Vec<u8> {
    let rng = SystemRandom::new();
    let mut signature = vec![0u8; key.keypair.public().modulus_len()];
    key.keypair
        .sign(rsa_encoding(alg), &rng, data, &mut signature)
        .expect("Signing failed");
    signature
}

pub fn rsa_token(alg: &str, kid: Option<&str>, claims: &Value, key: &RsaTestKey) -> String {
    build_token(&header(alg, kid), claims, |data| rsa_sign(alg, data, key))
}

pub fn rsa_jwk(kid: &str, key: &RsaTestKey) -> Value {
    json!({
        "kty": "RSA",
        "kid": kid,
        "use": "sig",
        "n": base64url::encode_bytes(&key.n),
        "e": base64url::encode_bytes(&key.e),
    })
}

// ============================================================================
// ECDSA
// ============================================================================

pub struct EcTestKey {
    pub keypair: EcdsaKeyPair,
    pub curve: EcdsaCurve,
}

impl EcTestKey {
    pub fn generate(curve: EcdsaCurve) -> Self {
        let rng = SystemRandom::new();
        let alg = match curve {
            EcdsaCurve::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
            EcdsaCurve::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
        };

        let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &rng).expect("Failed to generate key");
        let keypair = EcdsaKeyPair::from_pkcs8(alg, pkcs8.as_ref(), &rng).expect("Failed to parse key");

        Self { keypair, curve }
    }

    /// Affine coordinates from the uncompressed public point
    pub fn coordinates(&self) -> (Vec<u8>, Vec<u8>) {
        let point = self.keypair.public_key().as_ref();
        let len = self.curve.coordinate_len();
        (point[1..1 + len].to_vec(), point[1 + len..].to_vec())
    }

    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        let rng = SystemRandom::new();
        self.keypair
            .sign(&rng, data)
            .expect("Signing failed")
            .as_ref()
            .to_vec()
    }

    pub fn token(&self, kid: Option<&str>, claims: &Value) -> String {
        let alg = match self.curve {
            EcdsaCurve::P256 => "ES256",
            EcdsaCurve::P384 => "ES384",
        };
        build_token(&header(alg, kid), claims, |data| self.sign(data))
    }

    pub fn jwk(&self, kid: &str) -> Value {
        let crv = match self.curve {
            EcdsaCurve::P256 => "P-256",
            EcdsaCurve::P384 => "P-384",
        };
        let (x, y) = self.coordinates();
        json!({
            "kty": "EC",
            "kid": kid,
            "crv": crv,
            "x": base64url::encode_bytes(x),
            "y": base64url::encode_bytes(y),
        })
    }
}

// ============================================================================
// EdDSA
// ============================================================================

pub struct EdTestKey {
    pub keypair: Ed25519KeyPair,
}

impl EdTestKey {
    pub fn generate() -> Self {
        let rng = SystemRandom::new();
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&rng).expect("Failed to generate key");
        let keypair = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).expect("Failed to parse key");
        Self { keypair }
    }

    pub fn token(&self, kid: Option<&str>, claims: &Value) -> String {
        build_token(&header("EdDSA", kid), claims, |data| {
            self.keypair.sign(data).as_ref().to_vec()
        })
    }

    pub fn jwk(&self, kid: &str) -> Value {
        json!({
            "kty": "OKP",
            "kid": kid,
            "crv": "Ed25519",
            "x": base64url::encode_bytes(self.keypair.public_key().as_ref()),
        })
    }
}

// ============================================================================
// JWKS
// ============================================================================

pub fn jwks(keys: Vec<Value>) -> jwtverify::JwkSet {
    jwtverify::JwkSet::from_value(json!({ "keys": keys })).unwrap()
}
