use std::fmt;

use alloy_primitives::FixedBytes;
use mevreg_primitives::{FixedByteArray, serde_hex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::constants::SIGNATURE_LENGTH;

/// Compressed G2 point.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Encode, Decode, TreeHash, Default)]
pub struct BLSSignature {
    pub inner: FixedBytes<SIGNATURE_LENGTH>,
}

impl FixedByteArray for BLSSignature {
    const LENGTH: usize = SIGNATURE_LENGTH;

    fn as_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }

    fn from_slice_lossy(bytes: &[u8]) -> Self {
        Self {
            inner: FixedBytes::from_slice_lossy(bytes),
        }
    }
}

impl Serialize for BLSSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_hex::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for BLSSignature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_hex::deserialize(deserializer)
    }
}

impl fmt::Display for BLSSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl BLSSignature {
    pub fn to_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }
}
