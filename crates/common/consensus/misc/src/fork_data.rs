use alloy_primitives::{B256, aliases::B32};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

use crate::constants::beacon::{GENESIS_FORK_VERSION, GENESIS_VALIDATORS_ROOT};

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct ForkData {
    pub current_version: B32,
    pub genesis_validators_root: B256,
}

impl Default for ForkData {
    fn default() -> Self {
        Self {
            current_version: GENESIS_FORK_VERSION,
            genesis_validators_root: GENESIS_VALIDATORS_ROOT,
        }
    }
}

impl ForkData {
    pub fn new(current_version: B32, genesis_validators_root: B256) -> Self {
        Self {
            current_version,
            genesis_validators_root,
        }
    }

    /// Return the 32-byte fork data root for the ``current_version`` and
    /// ``genesis_validators_root``. This is used primarily in signature domains to avoid
    /// collisions across forks/chains.
    pub fn compute_fork_data_root(&self) -> B256 {
        self.tree_hash_root()
    }
}
