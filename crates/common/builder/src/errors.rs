use mevreg_bls::errors::BLSError;
use mevreg_primitives::ByteArrayError;
use reqwest::StatusCode;
use ssz::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Invalid SSZ size: expected {expected} bytes, got {actual}")]
    InvalidSszSize { expected: usize, actual: usize },

    #[error("SSZ decode error: {0:?}")]
    SszDecode(DecodeError),

    #[error("Byte array error: {0}")]
    ByteArray(#[from] ByteArrayError),

    #[error("BLS error: {0}")]
    Crypto(#[from] BLSError),

    #[error("Registration signature does not verify against its signing root")]
    VerificationFailed,

    #[error("Invalid relay url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Relay responded with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}
