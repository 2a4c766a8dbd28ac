use alloy_primitives::{B256, aliases::B32};
use tree_hash::TreeHash;

use crate::{fork_data::ForkData, signing_data::SigningData};

/// Return the domain for the ``domain_type`` and ``fork_version``.
///
/// `None` selects [`crate::constants::beacon::GENESIS_FORK_VERSION`] and
/// [`crate::constants::beacon::GENESIS_VALIDATORS_ROOT`] respectively.
pub fn compute_domain(
    domain_type: B32,
    fork_version: Option<B32>,
    genesis_validators_root: Option<B256>,
) -> B256 {
    let default_fork_data = ForkData::default();
    let fork_data = ForkData {
        current_version: fork_version.unwrap_or(default_fork_data.current_version),
        genesis_validators_root: genesis_validators_root
            .unwrap_or(default_fork_data.genesis_validators_root),
    };

    compute_domain_with_fork_data(domain_type, &fork_data)
}

/// `domain_type || fork_data_root[..28]`
pub fn compute_domain_with_fork_data(domain_type: B32, fork_data: &ForkData) -> B256 {
    let fork_data_root = fork_data.compute_fork_data_root();

    let mut domain = [0u8; 32];
    domain[..4].copy_from_slice(domain_type.as_slice());
    domain[4..].copy_from_slice(&fork_data_root[..28]);
    B256::from(domain)
}

/// Return the signing root for the corresponding signing data.
pub fn compute_signing_root<SSZObject: TreeHash + ?Sized>(
    ssz_object: &SSZObject,
    domain: B256,
) -> B256 {
    SigningData {
        object_root: ssz_object.tree_hash_root(),
        domain,
    }
    .tree_hash_root()
}
