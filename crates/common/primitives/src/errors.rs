#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ByteArrayError {
    #[error("Invalid hex string")]
    InvalidHexString,

    #[error("Invalid byte length: expected {expected}, got {actual}")]
    InvalidByteLength { expected: usize, actual: usize },
}
