use std::{fs, path::PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use mevreg_builder::{
    registration::{verify_registration_signature, verify_registration_structure},
    validator_registration::SignedValidatorRegistrationV1,
};
use tracing::info;

use crate::cli::DomainArgs;

#[derive(Debug, Parser)]
pub struct VerifyConfig {
    #[arg(long, help = "Path to a JSON encoded signed validator registration")]
    pub input: PathBuf,

    #[command(flatten)]
    pub domain: DomainArgs,
}

impl VerifyConfig {
    pub fn load_signed_registration(&self) -> anyhow::Result<SignedValidatorRegistrationV1> {
        let contents = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to decode registration from {}", self.input.display()))
    }

    /// Loads the registration and runs the structural and the cryptographic check. Decoding
    /// failures of the signature or pubkey are returned as they are, `Ok(false)` from either
    /// check is an error of its own.
    pub fn verify(&self) -> anyhow::Result<SignedValidatorRegistrationV1> {
        let signed_registration = self.load_signed_registration()?;
        let pubkey = signed_registration.message.pubkey;

        let well_formed = verify_registration_structure(
            &signed_registration.signature,
            &pubkey,
            &signed_registration.message.to_ssz_bytes(),
        )
        .context("Structural check of the registration failed")?;
        if !well_formed {
            bail!("Registration signature or pubkey is malformed");
        }

        let authentic = verify_registration_signature(&signed_registration, self.domain.domain())
            .context("Signature check of the registration failed")?;
        info!(%pubkey, authentic, "Checked validator registration");
        if !authentic {
            bail!("Validator registration is not valid under the configured domain");
        }

        Ok(signed_registration)
    }
}
