use blst::min_pk::PublicKey as BlstPublicKey;
use mevreg_primitives::FixedByteArray;

use crate::{errors::BLSError, pubkey::PubKey, traits::Validate};

impl From<BlstPublicKey> for PubKey {
    fn from(value: BlstPublicKey) -> Self {
        PubKey::from_slice_lossy(&value.compress())
    }
}

impl PubKey {
    pub fn to_blst_pubkey(&self) -> Result<BlstPublicKey, BLSError> {
        BlstPublicKey::from_bytes(self.inner.as_slice()).map_err(|_| BLSError::InvalidPublicKey)
    }
}

impl Validate for PubKey {
    type Error = BLSError;

    fn check_encoding(&self) -> Result<(), Self::Error> {
        self.to_blst_pubkey().map(|_| ())
    }

    fn validate(&self) -> Result<(), Self::Error> {
        self.to_blst_pubkey()?
            .validate()
            .map_err(|_| BLSError::InvalidPublicKey)
    }
}
