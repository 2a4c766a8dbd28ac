/// Domain separation tag of the proof-of-possession ciphersuite used by Ethereum.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

pub const PUBKEY_LENGTH: usize = 48;
pub const SIGNATURE_LENGTH: usize = 96;
pub const PRIVATE_KEY_LENGTH: usize = 32;
