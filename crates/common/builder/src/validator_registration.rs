use alloy_primitives::{Address, B256};
use mevreg_bls::{BLSSignature, PubKey};
use mevreg_merkle::{generate_proof, merkle_tree, tree_depth};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

use crate::errors::RegistrationError;

/// 20 (fee recipient) + 8 (gas limit) + 8 (timestamp) + 48 (pubkey)
pub const REGISTRATION_SSZ_SIZE: usize = 84;
/// [`REGISTRATION_SSZ_SIZE`] + 96 (signature)
pub const SIGNED_REGISTRATION_SSZ_SIZE: usize = 180;
pub const REGISTRATION_FIELD_COUNT: usize = 4;

/// A validator's preferred fee recipient and gas limit, as submitted to MEV relays.
///
/// Field order is part of the format: it fixes both the SSZ layout and the order of the leaves
/// in the hash tree.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct ValidatorRegistrationV1 {
    #[serde(with = "mevreg_primitives::serde_hex")]
    pub fee_recipient: Address,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    pub pubkey: PubKey,
}

impl ValidatorRegistrationV1 {
    pub fn new(fee_recipient: Address, gas_limit: u64, timestamp: u64, pubkey: PubKey) -> Self {
        Self {
            fee_recipient,
            gas_limit,
            timestamp,
            pubkey,
        }
    }

    pub fn to_ssz_bytes(&self) -> Vec<u8> {
        ssz::Encode::as_ssz_bytes(self)
    }

    /// Decodes exactly [`REGISTRATION_SSZ_SIZE`] bytes. The length is checked before any field
    /// is read.
    pub fn from_ssz(bytes: &[u8]) -> Result<Self, RegistrationError> {
        if bytes.len() != REGISTRATION_SSZ_SIZE {
            return Err(RegistrationError::InvalidSszSize {
                expected: REGISTRATION_SSZ_SIZE,
                actual: bytes.len(),
            });
        }

        <Self as ssz::Decode>::from_ssz_bytes(bytes).map_err(RegistrationError::SszDecode)
    }

    /// Hash tree roots of the fields in declaration order. These are the leaves merkleized into
    /// [`TreeHash::tree_hash_root`].
    pub fn field_roots(&self) -> [B256; REGISTRATION_FIELD_COUNT] {
        [
            self.fee_recipient.tree_hash_root(),
            self.gas_limit.tree_hash_root(),
            self.timestamp.tree_hash_root(),
            self.pubkey.tree_hash_root(),
        ]
    }

    /// Returns the leaf for `field_index` and its branch up to the message root.
    pub fn field_proof(&self, field_index: usize) -> anyhow::Result<(B256, Vec<B256>)> {
        let depth = tree_depth(REGISTRATION_FIELD_COUNT);
        let tree = merkle_tree(&self.field_roots(), depth)?;
        generate_proof(&tree, field_index, depth)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct SignedValidatorRegistrationV1 {
    pub message: ValidatorRegistrationV1,
    pub signature: BLSSignature,
}

impl SignedValidatorRegistrationV1 {
    pub fn to_ssz_bytes(&self) -> Vec<u8> {
        ssz::Encode::as_ssz_bytes(self)
    }

    pub fn from_ssz(bytes: &[u8]) -> Result<Self, RegistrationError> {
        if bytes.len() != SIGNED_REGISTRATION_SSZ_SIZE {
            return Err(RegistrationError::InvalidSszSize {
                expected: SIGNED_REGISTRATION_SSZ_SIZE,
                actual: bytes.len(),
            });
        }

        <Self as ssz::Decode>::from_ssz_bytes(bytes).map_err(RegistrationError::SszDecode)
    }
}
