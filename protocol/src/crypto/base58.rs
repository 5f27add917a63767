//! # Base58
//!
//! Base58 over the Bitcoin alphabet, the textual layer of a SIN.
//!
//! Encoding takes hex text because that is what the SIN pipeline carries
//! between stages. Each leading `00` byte of the input becomes one leading
//! `1`, so an all-zero input encodes to nothing but `1`s and the empty
//! input encodes to the empty string.
//!
//! Both directions go through `bs58`.

use thiserror::Error;

/// Errors from base58 encoding and decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base58Error {
    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),
}

/// Encode a hex string (big-endian, whole bytes) as base58.
///
/// # Example
///
/// ```
/// use bitauth_protocol::crypto::base58;
///
/// assert_eq!(base58::encode_hex("00").unwrap(), "1");
/// assert_eq!(base58::encode_hex("000001").unwrap(), "112");
/// ```
pub fn encode_hex(hex_str: &str) -> Result<String, Base58Error> {
    let bytes = hex::decode(hex_str).map_err(|e| Base58Error::InvalidHex(e.to_string()))?;
    Ok(encode(&bytes))
}

/// Encode raw big-endian bytes as base58.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode base58 text into raw bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| Base58Error::InvalidBase58(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_zero_byte_is_one() {
        assert_eq!(encode_hex("00").unwrap(), "1");
    }

    #[test]
    fn leading_zero_pairs_become_leading_ones() {
        assert_eq!(encode_hex("0000").unwrap(), "11");
        assert_eq!(encode_hex("000001").unwrap(), "112");
        assert_eq!(encode_hex("00ff").unwrap(), "15Q");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(encode_hex("").unwrap(), "");
    }

    #[test]
    fn small_values() {
        assert_eq!(encode_hex("01").unwrap(), "2");
        assert_eq!(encode_hex("39").unwrap(), "z"); // 57
        assert_eq!(encode_hex("3a").unwrap(), "21"); // 58
    }

    #[test]
    fn known_bitcoin_vector() {
        // "Hello World!" from the base58 test suite used across Bitcoin libs.
        assert_eq!(encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
    }

    #[test]
    fn single_digit_values_follow_the_alphabet() {
        use crate::config::BASE58_ALPHABET;
        for value in 1u8..58 {
            assert_eq!(
                encode(&[value]),
                char::from(BASE58_ALPHABET[value as usize]).to_string()
            );
        }
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(encode_hex("abc"), Err(Base58Error::InvalidHex(_))));
        assert!(matches!(encode_hex("zz"), Err(Base58Error::InvalidHex(_))));
    }

    #[test]
    fn decode_reverses_encode() {
        let bytes = [0x00, 0x0f, 0x02, 0x13, 0xfa];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn decode_rejects_ambiguous_characters() {
        for bad in ["0", "O", "I", "l", "abc0"] {
            assert!(matches!(decode(bad), Err(Base58Error::InvalidBase58(_))));
        }
    }
}
