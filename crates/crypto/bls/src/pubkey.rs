use std::fmt;

use alloy_primitives::FixedBytes;
use mevreg_primitives::{FixedByteArray, serde_hex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::{constants::PUBKEY_LENGTH, errors::BLSError};

/// Compressed G1 point. Holding a `PubKey` says nothing about curve validity, see
/// [`crate::traits::Validate`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Encode, Decode, TreeHash, Default)]
pub struct PubKey {
    pub inner: FixedBytes<PUBKEY_LENGTH>,
}

impl FixedByteArray for PubKey {
    const LENGTH: usize = PUBKEY_LENGTH;

    fn as_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }

    fn from_slice_lossy(bytes: &[u8]) -> Self {
        Self {
            inner: FixedBytes::from_slice_lossy(bytes),
        }
    }
}

impl Serialize for PubKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_hex::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for PubKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_hex::deserialize(deserializer)
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl PubKey {
    pub fn to_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }
}

pub fn pubkey_from_str(key_str: &str) -> Result<PubKey, BLSError> {
    Ok(PubKey::from_hex_str(key_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pubkey_from_str_requires_48_bytes() {
        let short = format!("0x{}", "ab".repeat(47));
        let exact = format!("0x{}", "ab".repeat(48));

        assert_eq!(pubkey_from_str(&short), Err(BLSError::InvalidByteLength));
        assert_eq!(pubkey_from_str(&exact).unwrap().to_bytes(), &[0xAB; 48]);
    }

    #[test]
    fn test_pubkey_from_str_rejects_bad_hex() {
        assert_eq!(
            pubkey_from_str("0xnot-hex"),
            Err(BLSError::InvalidHexString)
        );
    }

    #[test]
    fn test_pubkey_json_is_prefixed_hex() {
        let pubkey = PubKey::from_slice_lossy(&[0x11; 48]);
        let json = serde_json::to_string(&pubkey).unwrap();

        assert_eq!(json, format!("\"0x{}\"", "11".repeat(48)));
        assert_eq!(serde_json::from_str::<PubKey>(&json).unwrap(), pubkey);
    }
}
