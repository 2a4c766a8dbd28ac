use blst::{
    BLST_ERROR,
    min_pk::{PublicKey as BlstPublicKey, Signature as BlstSignature},
};
use mevreg_primitives::FixedByteArray;

use crate::{
    constants::DST,
    errors::BLSError,
    pubkey::PubKey,
    signature::BLSSignature,
    traits::{Validate, Verifiable},
};

impl From<BlstSignature> for BLSSignature {
    fn from(value: BlstSignature) -> Self {
        BLSSignature::from_slice_lossy(&value.compress())
    }
}

impl BLSSignature {
    pub fn to_blst_signature(&self) -> Result<BlstSignature, BLSError> {
        BlstSignature::from_bytes(self.inner.as_slice()).map_err(|_| BLSError::InvalidSignature)
    }
}

impl Verifiable for BLSSignature {
    type Error = BLSError;

    fn verify(&self, pubkey: &PubKey, message: &[u8]) -> Result<bool, Self::Error> {
        let signature = self.to_blst_signature()?;
        let public_key: BlstPublicKey = pubkey.to_blst_pubkey()?;

        Ok(signature.verify(true, message, DST, &[], &public_key, true) == BLST_ERROR::BLST_SUCCESS)
    }
}

impl Validate for BLSSignature {
    type Error = BLSError;

    fn check_encoding(&self) -> Result<(), Self::Error> {
        self.to_blst_signature().map(|_| ())
    }

    fn validate(&self) -> Result<(), Self::Error> {
        self.to_blst_signature()?
            .validate(true)
            .map_err(|_| BLSError::InvalidSignature)
    }
}
