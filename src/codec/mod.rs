//! Hex codec for hashes and signatures.
//!
//! The provider's wire format carries hashes and signatures as
//! `0x`-prefixed hex strings; everything local works on raw bytes.

use crate::error::{FlowError, FlowResult};

/// Decode a `0x`-prefixed hex string into raw bytes.
///
/// The prefix is required. Non-hex characters after the prefix or an odd
/// number of digits fail with [`FlowError::Decode`].
pub fn hex_to_bytes(input: &str) -> FlowResult<Vec<u8>> {
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| FlowError::Decode(format!("missing 0x prefix: {}", input)))?;

    hex::decode(digits).map_err(|e| FlowError::Decode(e.to_string()))
}

/// Encode raw bytes as a `0x`-prefixed lowercase hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let bytes = vec![0x00, 0x01, 0xab, 0xff, 0x7e];
        assert_eq!(hex_to_bytes(&bytes_to_hex(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_round_trip_empty() {
        assert_eq!(bytes_to_hex(&[]), "0x");
        assert_eq!(hex_to_bytes("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_lowercase_output() {
        assert_eq!(bytes_to_hex(&[0xAB, 0xCD]), "0xabcd");
    }

    #[test]
    fn test_uppercase_input_accepted() {
        assert_eq!(hex_to_bytes("0xABCD").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn test_non_hex_character_fails() {
        let err = hex_to_bytes("0xZZ").unwrap_err();
        assert!(matches!(err, FlowError::Decode(_)));
    }

    #[test]
    fn test_odd_length_fails() {
        let err = hex_to_bytes("0xabc").unwrap_err();
        assert!(matches!(err, FlowError::Decode(_)));
    }

    #[test]
    fn test_missing_prefix_fails() {
        let err = hex_to_bytes("abcd").unwrap_err();
        assert!(matches!(err, FlowError::Decode(_)));
    }
}
