//! JSON Web Key Sets and key resolution
//!
//! Keys are supplied already fetched and parsed. [`resolve_key`] turns the
//! token's algorithm and `kid` into a [`VerificationKey`](crate::VerificationKey)
//! using either the static secret or a [`JwkSet`].

mod jwk;
#[allow(clippy::module_inception)]
mod jwks;
mod resolver;

pub use jwk::Jwk;
pub use jwks::JwkSet;
pub use resolver::resolve_key;
