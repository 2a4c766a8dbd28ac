use alloy_primitives::{Address, FixedBytes, hex};

use crate::errors::ByteArrayError;

/// A byte container of exactly [`FixedByteArray::LENGTH`] bytes.
///
/// Text form is lowercase hex with a `0x` prefix. Bytes are kept in the order they were given,
/// no endianness conversion happens at this level.
pub trait FixedByteArray: Sized {
    const LENGTH: usize;

    fn as_bytes(&self) -> &[u8];

    /// Copies `min(bytes.len(), LENGTH)` bytes starting at offset zero. Missing bytes stay zero,
    /// extra bytes are dropped. Only for trusted input, use [`FixedByteArray::from_exact`] at
    /// decoding boundaries.
    fn from_slice_lossy(bytes: &[u8]) -> Self;

    fn from_exact(bytes: &[u8]) -> Result<Self, ByteArrayError> {
        if bytes.len() != Self::LENGTH {
            return Err(ByteArrayError::InvalidByteLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            });
        }

        Ok(Self::from_slice_lossy(bytes))
    }

    fn to_hex_string(&self) -> String {
        hex::encode_prefixed(self.as_bytes())
    }

    /// Inverse of [`FixedByteArray::to_hex_string`]. The `0x` prefix is required.
    fn from_hex_str(text: &str) -> Result<Self, ByteArrayError> {
        let digits = text
            .strip_prefix("0x")
            .ok_or(ByteArrayError::InvalidHexString)?;
        let bytes = hex::decode(digits).map_err(|_| ByteArrayError::InvalidHexString)?;
        Self::from_exact(&bytes)
    }
}

impl<const N: usize> FixedByteArray for FixedBytes<N> {
    const LENGTH: usize = N;

    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }

    fn from_slice_lossy(bytes: &[u8]) -> Self {
        let length = bytes.len().min(N);
        let mut inner = [0u8; N];
        inner[..length].copy_from_slice(&bytes[..length]);
        Self(inner)
    }
}

impl FixedByteArray for Address {
    const LENGTH: usize = 20;

    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }

    fn from_slice_lossy(bytes: &[u8]) -> Self {
        Address::from(FixedBytes::<20>::from_slice_lossy(bytes))
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{B256, aliases::B32};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_from_slice_lossy_pads_short_input() {
        let bytes = B256::from_slice_lossy(&[0xAA; 3]);

        assert_eq!(&bytes[..3], &[0xAA; 3]);
        assert!(bytes[3..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_from_slice_lossy_truncates_long_input() {
        let source: Vec<u8> = (0u8..40).collect();
        let bytes = B32::from_slice_lossy(&source);

        assert_eq!(bytes.as_slice(), &[0, 1, 2, 3]);
    }

    #[rstest]
    #[case(0)]
    #[case(19)]
    #[case(21)]
    #[case(32)]
    fn test_address_from_exact_rejects_wrong_length(#[case] length: usize) {
        let result = Address::from_exact(&vec![1u8; length]);

        assert_eq!(
            result,
            Err(ByteArrayError::InvalidByteLength {
                expected: 20,
                actual: length
            })
        );
    }

    #[test]
    fn test_fixed_bytes_from_exact_accepts_matching_length() {
        let bytes = FixedBytes::<96>::from_exact(&[7u8; 96]).unwrap();

        assert_eq!(bytes.as_bytes(), &[7u8; 96]);
    }

    #[test]
    fn test_hex_text_is_lowercase_and_prefixed() {
        let address =
            Address::from_hex_str("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap();

        assert_eq!(
            address.to_hex_string(),
            "0xd8da6bf26964af9d7eed9e03e53415d37aa96045"
        );
        assert_eq!(address[0], 0xd8);
        assert_eq!(address[19], 0x45);
    }

    #[rstest]
    #[case("0x0000000")]
    #[case("0xzz000000")]
    #[case("0x00 00000")]
    #[case("00000001")]
    #[case("0X00000001")]
    fn test_from_hex_str_rejects_malformed_hex(#[case] text: &str) {
        assert_eq!(
            B32::from_hex_str(text),
            Err(ByteArrayError::InvalidHexString)
        );
    }

    #[test]
    fn test_from_hex_str_requires_prefix() {
        assert_eq!(
            Address::from_hex_str("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
            Err(ByteArrayError::InvalidHexString)
        );
        assert!(Address::from_hex_str("0xd8da6bf26964af9d7eed9e03e53415d37aa96045").is_ok());
    }

    #[test]
    fn test_from_hex_str_rejects_wrong_decoded_length() {
        assert_eq!(
            B32::from_hex_str("0x0000000001"),
            Err(ByteArrayError::InvalidByteLength {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_hex_text_roundtrip_preserves_byte_order() {
        let original = FixedBytes::<48>::from_slice_lossy(&(0u8..48).collect::<Vec<_>>());
        let decoded = FixedBytes::<48>::from_hex_str(&original.to_hex_string()).unwrap();

        assert_eq!(decoded, original);
        assert!(original.to_hex_string().starts_with("0x000102"));
    }
}
