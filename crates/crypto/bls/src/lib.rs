//! BLS12-381 signatures as used by the builder API.
//!
//! The wrappers in this crate only hold compressed bytes. Everything that touches curve points
//! lives in a backend module selected by cargo feature, so callers depend on the traits in
//! [`traits`] rather than on a concrete curve library.

pub mod constants;
pub mod errors;
pub mod private_key;
pub mod pubkey;
pub mod signature;
pub mod traits;

#[cfg(feature = "supranational")]
pub mod supranational;

pub use private_key::PrivateKey;
pub use pubkey::PubKey;
pub use signature::BLSSignature;
