use std::fmt;

use alloy_primitives::B256;

/// Raw 32-byte big-endian scalar. Key generation and signing are provided by the backend.
#[derive(PartialEq, Clone, Default, Eq, Hash)]
pub struct PrivateKey {
    pub inner: B256,
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("inner", &"<redacted>")
            .finish()
    }
}

impl PrivateKey {
    pub fn to_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }
}
