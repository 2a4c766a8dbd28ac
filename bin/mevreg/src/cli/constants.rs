pub const DEFAULT_MEV_RELAY_URL: &str = "http://0.0.0.0:18550";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "5";
pub const DEFAULT_CONTENT_TYPE: &str = "json";
pub const DEFAULT_FEE_RECIPIENT: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
pub const DEFAULT_GAS_LIMIT: u64 = 1;
pub const DEFAULT_TIMESTAMP: u64 = 1;
pub const DEFAULT_DOMAIN_TYPE: &str = "0x00000001";
pub const DEFAULT_FORK_VERSION: &str = "0x00000000";
pub const DEFAULT_GENESIS_VALIDATORS_ROOT: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";
pub const DEFAULT_VERBOSITY: u8 = 3;
