use crate::{pubkey::PubKey, signature::BLSSignature};

pub trait Signable {
    type Error;

    fn sign(&self, message: &[u8]) -> Result<BLSSignature, Self::Error>;
}

pub trait Verifiable {
    type Error;

    /// Runs the pairing check of `self` against `pubkey` over `message`.
    fn verify(&self, pubkey: &PubKey, message: &[u8]) -> Result<bool, Self::Error>;
}

pub trait Validate {
    type Error;

    /// Decompresses the point without subgroup or infinity checks.
    fn check_encoding(&self) -> Result<(), Self::Error>;

    /// Full validation: decompression, subgroup membership and non-infinity.
    fn validate(&self) -> Result<(), Self::Error>;
}
