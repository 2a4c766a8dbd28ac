use mevreg_primitives::ByteArrayError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BLSError {
    #[error("Invalid byte length")]
    InvalidByteLength,

    #[error("Invalid hex string")]
    InvalidHexString,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Blst error: {0}")]
    BlstError(String),
}

impl From<ByteArrayError> for BLSError {
    fn from(err: ByteArrayError) -> Self {
        match err {
            ByteArrayError::InvalidHexString => BLSError::InvalidHexString,
            ByteArrayError::InvalidByteLength { .. } => BLSError::InvalidByteLength,
        }
    }
}
