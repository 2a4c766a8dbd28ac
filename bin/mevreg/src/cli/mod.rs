use alloy_primitives::{Address, B256, aliases::B32};
use clap::{Args, Parser, Subcommand};
use mevreg_consensus_misc::{fork_data::ForkData, misc::compute_domain_with_fork_data};
use mevreg_primitives::FixedByteArray;

use crate::cli::{
    constants::{
        DEFAULT_DOMAIN_TYPE, DEFAULT_FEE_RECIPIENT, DEFAULT_FORK_VERSION, DEFAULT_GAS_LIMIT,
        DEFAULT_GENESIS_VALIDATORS_ROOT, DEFAULT_TIMESTAMP, DEFAULT_VERBOSITY,
    },
    register::RegisterConfig,
    sign::SignConfig,
    verify::VerifyConfig,
};

pub mod constants;
pub mod register;
pub mod sign;
pub mod verify;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (1 = error, 2 = warn, 3 = info, 4 = debug, 5 = trace)
    #[arg(short, long, global = true, default_value_t = DEFAULT_VERBOSITY)]
    pub verbosity: u8,
}

impl Cli {
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 | 1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign a fresh validator registration, verify it and submit it to a relay
    #[command(name = "register")]
    Register(Box<RegisterConfig>),

    /// Sign a fresh validator registration, verify it and print it
    #[command(name = "sign")]
    Sign(Box<SignConfig>),

    /// Verify a signed validator registration read from a JSON file
    #[command(name = "verify")]
    Verify(VerifyConfig),
}

/// Signing domain inputs. The defaults give the builder domain of the genesis fork.
#[derive(Debug, Clone, Args)]
pub struct DomainArgs {
    #[arg(long, help = "4-byte domain type", default_value = DEFAULT_DOMAIN_TYPE, value_parser = b32_parser)]
    pub domain_type: B32,

    #[arg(long, help = "4-byte fork version mixed into the domain", default_value = DEFAULT_FORK_VERSION, value_parser = b32_parser)]
    pub fork_version: B32,

    #[arg(long, help = "32-byte genesis validators root mixed into the domain", default_value = DEFAULT_GENESIS_VALIDATORS_ROOT, value_parser = b256_parser)]
    pub genesis_validators_root: B256,
}

impl DomainArgs {
    pub fn fork_data(&self) -> ForkData {
        ForkData::new(self.fork_version, self.genesis_validators_root)
    }

    pub fn domain(&self) -> B256 {
        compute_domain_with_fork_data(self.domain_type, &self.fork_data())
    }
}

#[derive(Debug, Clone, Args)]
pub struct RegistrationArgs {
    #[arg(long, help = "Address that receives the block fees", default_value = DEFAULT_FEE_RECIPIENT, value_parser = address_parser)]
    pub fee_recipient: Address,

    #[arg(long, help = "Preferred execution gas limit", default_value_t = DEFAULT_GAS_LIMIT)]
    pub gas_limit: u64,

    #[arg(long, help = "Registration timestamp in seconds", default_value_t = DEFAULT_TIMESTAMP)]
    pub timestamp: u64,

    #[command(flatten)]
    pub domain: DomainArgs,
}

pub fn address_parser(address_string: &str) -> Result<Address, String> {
    Address::from_hex_str(address_string)
        .map_err(|err| format!("Could not parse the address {address_string}: {err}"))
}

pub fn b32_parser(bytes_string: &str) -> Result<B32, String> {
    B32::from_hex_str(bytes_string)
        .map_err(|err| format!("Could not parse 4 bytes from {bytes_string}: {err}"))
}

pub fn b256_parser(bytes_string: &str) -> Result<B256, String> {
    B256::from_hex_str(bytes_string)
        .map_err(|err| format!("Could not parse 32 bytes from {bytes_string}: {err}"))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, fixed_bytes};
    use mevreg_builder::{DOMAIN_APPLICATION_BUILDER, http_client::ContentType};
    use mevreg_consensus_misc::misc::compute_domain;

    use super::*;

    #[test]
    fn test_cli_sign_command_defaults() {
        let cli = Cli::parse_from(["mevreg", "sign"]);

        assert_eq!(cli.log_directive(), "info");
        match cli.command {
            Commands::Sign(config) => {
                let registration = &config.registration;
                assert_eq!(
                    registration.fee_recipient,
                    address!("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045")
                );
                assert_eq!(registration.gas_limit, 1);
                assert_eq!(registration.timestamp, 1);
                assert_eq!(registration.domain.domain_type, DOMAIN_APPLICATION_BUILDER);
                assert_eq!(
                    registration.domain.domain(),
                    compute_domain(DOMAIN_APPLICATION_BUILDER, None, None)
                );
            }
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn test_cli_register_command() {
        let cli = Cli::parse_from([
            "mevreg",
            "register",
            "--verbosity",
            "4",
            "--gas-limit",
            "30000000",
            "--fork-version",
            "0x04000000",
            "--mev-relay-url",
            "http://127.0.0.1:18550",
            "--content-type",
            "ssz",
        ]);

        assert_eq!(cli.log_directive(), "debug");
        match cli.command {
            Commands::Register(config) => {
                assert_eq!(config.registration.gas_limit, 30_000_000);
                assert_eq!(
                    config.registration.domain.fork_version,
                    fixed_bytes!("0x04000000")
                );
                assert_eq!(config.content_type, ContentType::Ssz);
                assert!(!config.dry_run);
            }
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_short_fee_recipient() {
        let result = Cli::try_parse_from(["mevreg", "sign", "--fee-recipient", "0xd8dA6BF2"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_content_type() {
        let result = Cli::try_parse_from(["mevreg", "register", "--content-type", "xml"]);

        assert!(result.is_err());
    }
}
