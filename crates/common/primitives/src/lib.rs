pub mod errors;
pub mod fixed_bytes;
pub mod serde_hex;

pub use errors::ByteArrayError;
pub use fixed_bytes::FixedByteArray;
