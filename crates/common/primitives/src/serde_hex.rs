//! `#[serde(with = "mevreg_primitives::serde_hex")]` for any [`FixedByteArray`].
//!
//! Deserialization goes through [`FixedByteArray::from_hex_str`], so a wrong decoded length is
//! an error instead of being truncated or zero padded.

use serde::{Deserialize, Deserializer, Serializer};

use crate::fixed_bytes::FixedByteArray;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: FixedByteArray,
    S: Serializer,
{
    serializer.serialize_str(&value.to_hex_string())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FixedByteArray,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    T::from_hex_str(&text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Recipient {
        #[serde(with = "crate::serde_hex")]
        address: Address,
    }

    #[test]
    fn test_serialize_lowercase_prefixed() {
        let recipient = Recipient {
            address: Address::repeat_byte(0xAB),
        };

        assert_eq!(
            serde_json::to_string(&recipient).unwrap(),
            r#"{"address":"0xabababababababababababababababababababab"}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_short_value() {
        let result = serde_json::from_str::<Recipient>(r#"{"address":"0xabab"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_missing_prefix() {
        let result = serde_json::from_str::<Recipient>(
            r#"{"address":"abababababababababababababababababababab"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_malformed_hex() {
        let result = serde_json::from_str::<Recipient>(
            r#"{"address":"0xgggggggggggggggggggggggggggggggggggggggg"}"#,
        );

        assert!(result.is_err());
    }
}
