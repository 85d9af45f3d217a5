//! Token decoding and header validation
//!
//! These are the first two stages of verification. [`decode`] turns the compact
//! string into a [`DecodedToken`]; [`validate_header`] checks the header shape
//! and picks the algorithm.

mod decoded;
mod header;

pub use decoded::{decode, decode_value, DecodedToken};
pub use header::{validate_header, TokenHeader};
