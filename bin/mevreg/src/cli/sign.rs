use alloy_primitives::hex;
use clap::{Parser, ValueEnum};
use mevreg_builder::{
    errors::RegistrationError,
    registration::{build_signed_registration, generate_keypair},
    validator_registration::{SignedValidatorRegistrationV1, ValidatorRegistrationV1},
};
use tracing::{debug, info};

use crate::cli::RegistrationArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Beacon API JSON object
    Json,
    /// 0x-prefixed hex of the 180-byte SSZ encoding
    Ssz,
}

#[derive(Debug, Parser)]
pub struct SignConfig {
    #[command(flatten)]
    pub registration: RegistrationArgs,

    #[arg(long, help = "Output format of the signed registration", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl OutputFormat {
    pub fn render(
        &self,
        signed_registration: &SignedValidatorRegistrationV1,
    ) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string_pretty(signed_registration)?,
            OutputFormat::Ssz => hex::encode_prefixed(signed_registration.to_ssz_bytes()),
        })
    }
}

/// Generates a fresh keypair and returns a registration for it that already passed local
/// verification under `args.domain`.
pub fn sign_new_registration(
    args: &RegistrationArgs,
) -> Result<SignedValidatorRegistrationV1, RegistrationError> {
    let (private_key, pubkey) = generate_keypair(&mut rand::rng())?;
    info!(%pubkey, "Generated validator keypair");

    let message =
        ValidatorRegistrationV1::new(args.fee_recipient, args.gas_limit, args.timestamp, pubkey);
    let domain = args.domain.domain();
    debug!(?domain, "Computed registration signing domain");

    build_signed_registration(message, &private_key, domain)
}

#[cfg(test)]
mod tests {
    use mevreg_builder::{
        registration::verify_registration_signature,
        validator_registration::SIGNED_REGISTRATION_SSZ_SIZE,
    };

    use super::*;
    use crate::cli::{Cli, Commands};

    fn registration_args(args: &[&str]) -> RegistrationArgs {
        let cli = Cli::parse_from([&["mevreg", "sign"][..], args].concat());
        match cli.command {
            Commands::Sign(config) => config.registration,
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn test_sign_new_registration_with_defaults() {
        let args = registration_args(&[]);
        let signed_registration = sign_new_registration(&args).unwrap();

        assert_eq!(signed_registration.message.fee_recipient, args.fee_recipient);
        assert_eq!(signed_registration.message.gas_limit, 1);
        assert_eq!(signed_registration.message.timestamp, 1);
        assert!(
            verify_registration_signature(&signed_registration, args.domain.domain()).unwrap()
        );
    }

    #[test]
    fn test_signature_is_bound_to_domain_type() {
        let args = registration_args(&["--domain-type", "0x07000000"]);
        let signed_registration = sign_new_registration(&args).unwrap();

        let builder_args = registration_args(&[]);
        assert!(
            !verify_registration_signature(&signed_registration, builder_args.domain.domain())
                .unwrap()
        );
    }

    #[test]
    fn test_render_formats() {
        let signed_registration = sign_new_registration(&registration_args(&[])).unwrap();

        let json = OutputFormat::Json.render(&signed_registration).unwrap();
        let decoded: SignedValidatorRegistrationV1 = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, signed_registration);

        let ssz = OutputFormat::Ssz.render(&signed_registration).unwrap();
        assert!(ssz.starts_with("0x"));
        assert_eq!(ssz.len(), 2 + 2 * SIGNED_REGISTRATION_SSZ_SIZE);
    }
}
