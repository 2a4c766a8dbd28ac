use alloy_primitives::B256;
use mevreg_bls::{
    BLSSignature, PrivateKey, PubKey,
    errors::BLSError,
    traits::{Signable, Validate, Verifiable},
};
use mevreg_consensus_misc::{
    fork_data::ForkData,
    misc::{compute_domain_with_fork_data, compute_signing_root},
};
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

use crate::{
    DOMAIN_APPLICATION_BUILDER,
    errors::RegistrationError,
    validator_registration::{SignedValidatorRegistrationV1, ValidatorRegistrationV1},
};

pub fn generate_keypair<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(PrivateKey, PubKey), BLSError> {
    let private_key = PrivateKey::random(rng)?;
    let public_key = private_key.public_key()?;
    Ok((private_key, public_key))
}

/// Builder API domain for `fork_data`.
pub fn registration_domain(fork_data: &ForkData) -> B256 {
    compute_domain_with_fork_data(DOMAIN_APPLICATION_BUILDER, fork_data)
}

/// Signs the signing root of `message` under `domain`, never the message bytes themselves.
pub fn sign_registration<K>(
    message: ValidatorRegistrationV1,
    private_key: &K,
    domain: B256,
) -> Result<SignedValidatorRegistrationV1, K::Error>
where
    K: Signable,
{
    let signing_root = compute_signing_root(&message, domain);
    debug!(?signing_root, "Signing validator registration");
    let signature = private_key.sign(signing_root.as_slice())?;

    Ok(SignedValidatorRegistrationV1 { message, signature })
}

/// Structural check only: `signature` and `pubkey` must decompress into curve points.
///
/// `message` is not used and no pairing is computed, so `Ok(true)` says nothing about who signed
/// what. Use [`verify_registration_signature`] to decide whether a registration is authentic.
pub fn verify_registration_structure(
    signature: &BLSSignature,
    pubkey: &PubKey,
    _message: &[u8],
) -> Result<bool, BLSError> {
    signature.check_encoding()?;
    pubkey.check_encoding()?;
    Ok(true)
}

/// Re-derives the signing root of `signed_registration.message` under `domain` and checks the
/// signature against the message's own pubkey.
pub fn verify_registration_signature(
    signed_registration: &SignedValidatorRegistrationV1,
    domain: B256,
) -> Result<bool, BLSError> {
    let signing_root = compute_signing_root(&signed_registration.message, domain);

    signed_registration
        .signature
        .verify(&signed_registration.message.pubkey, signing_root.as_slice())
}

/// Local verification that must pass before a registration leaves the process: both the
/// structural decoding and the pairing check over the re-derived signing root.
pub fn verify_before_send(
    signed_registration: &SignedValidatorRegistrationV1,
    domain: B256,
) -> Result<(), RegistrationError> {
    let message = signed_registration.message.to_ssz_bytes();
    if !verify_registration_structure(
        &signed_registration.signature,
        &signed_registration.message.pubkey,
        &message,
    )? {
        return Err(RegistrationError::VerificationFailed);
    }

    if !verify_registration_signature(signed_registration, domain)? {
        warn!(
            pubkey = %signed_registration.message.pubkey,
            "Registration signature does not match its signing root"
        );
        return Err(RegistrationError::VerificationFailed);
    }

    Ok(())
}

/// Sign, assemble and verify under `domain`. Returns a registration that is ready to be
/// transmitted.
pub fn build_signed_registration(
    message: ValidatorRegistrationV1,
    private_key: &PrivateKey,
    domain: B256,
) -> Result<SignedValidatorRegistrationV1, RegistrationError> {
    let signed_registration = sign_registration(message, private_key, domain)?;
    verify_before_send(&signed_registration, domain)?;
    Ok(signed_registration)
}
