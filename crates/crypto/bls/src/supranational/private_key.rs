use alloy_primitives::B256;
use blst::min_pk::SecretKey as BlstSecretKey;
use rand::{CryptoRng, RngCore};

use crate::{
    PrivateKey,
    constants::{DST, PRIVATE_KEY_LENGTH},
    errors::BLSError,
    pubkey::PubKey,
    signature::BLSSignature,
    traits::Signable,
};

impl PrivateKey {
    /// Draws 32 bytes of key material from `rng` and derives a key with EIP-2333 `key_gen`,
    /// which reduces the output uniformly onto the scalar field.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, BLSError> {
        let mut ikm = [0u8; PRIVATE_KEY_LENGTH];
        rng.fill_bytes(&mut ikm);
        Self::from_ikm(&ikm)
    }

    pub fn from_ikm(ikm: &[u8]) -> Result<Self, BLSError> {
        let key = BlstSecretKey::key_gen(ikm, &[])
            .map_err(|err| BLSError::BlstError(format!("{err:?}")))?;
        Ok(Self {
            inner: B256::from(key.to_bytes()),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(BLSError::InvalidByteLength);
        }

        let key = BlstSecretKey::from_bytes(bytes).map_err(|_| BLSError::InvalidPrivateKey)?;
        Ok(Self {
            inner: B256::from(key.to_bytes()),
        })
    }

    pub fn public_key(&self) -> Result<PubKey, BLSError> {
        Ok(PubKey::from(self.to_blst_secret_key()?.sk_to_pk()))
    }

    fn to_blst_secret_key(&self) -> Result<BlstSecretKey, BLSError> {
        BlstSecretKey::from_bytes(self.inner.as_slice()).map_err(|_| BLSError::InvalidPrivateKey)
    }
}

impl Signable for PrivateKey {
    type Error = BLSError;

    fn sign(&self, message: &[u8]) -> Result<BLSSignature, Self::Error> {
        let blst_key = self.to_blst_secret_key()?;
        Ok(BLSSignature::from(blst_key.sign(message, DST, &[])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_keys_differ() {
        let mut rng = rand::rng();
        let first = PrivateKey::random(&mut rng).unwrap();
        let second = PrivateKey::random(&mut rng).unwrap();

        assert_ne!(first, second);
        assert_ne!(first.public_key().unwrap(), second.public_key().unwrap());
    }

    #[test]
    fn test_from_ikm_is_deterministic() {
        let ikm = [42u8; 32];

        assert_eq!(
            PrivateKey::from_ikm(&ikm).unwrap(),
            PrivateKey::from_ikm(&ikm).unwrap()
        );
    }

    #[test]
    fn test_from_ikm_rejects_short_material() {
        assert!(PrivateKey::from_ikm(&[1u8; 16]).is_err());
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let key = PrivateKey::from_ikm(&[7u8; 32]).unwrap();

        assert_eq!(PrivateKey::from_bytes(key.to_bytes()).unwrap(), key);
        assert_eq!(
            PrivateKey::from_bytes(&[0u8; 31]),
            Err(BLSError::InvalidByteLength)
        );
    }

    #[test]
    fn test_from_bytes_rejects_scalar_above_modulus() {
        assert_eq!(
            PrivateKey::from_bytes(&[0xFF; 32]),
            Err(BLSError::InvalidPrivateKey)
        );
    }
}
