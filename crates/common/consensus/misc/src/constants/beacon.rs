use alloy_primitives::{B256, aliases::B32, fixed_bytes};

/// Fork version of the single network context a registration is signed for.
pub const GENESIS_FORK_VERSION: B32 = fixed_bytes!("0x00000000");

/// Builder domains are computed with an empty genesis validators root.
pub const GENESIS_VALIDATORS_ROOT: B256 = B256::ZERO;
