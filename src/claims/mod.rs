mod validator;

pub use validator::{validate_claims, ClaimValidators, EXPIRATION_CLAIM};

use serde_json::{Map, Value};

/// Decoded JWT claims
///
/// Claims are kept as an insertion-ordered JSON object. Only `exp` has built-in
/// meaning; every other claim is checked by equality against
/// [`ClaimValidators`] or left for the caller.
pub type Claims = Map<String, Value>;
