//! # Hashing Utilities
//!
//! The two hash functions the SIN protocol is built from, plus the hex/byte
//! conversions that glue the pipeline stages together.
//!
//! - **SHA-256** — public key digest and the double-hash checksum.
//! - **RIPEMD-160** — shortens the public key digest to 20 bytes, exactly
//!   like a Bitcoin `HASH160`.
//!
//! ## Minimal bytes
//!
//! The reference BitAuth tooling moves between stages as hex *text*, and
//! turns that text back into bytes by parsing it as an unsigned integer and
//! serializing the integer big-endian. Integers have no leading zeros, so a
//! digest like `00ab…` comes back as 31 bytes instead of 32. That quirk is
//! baked into every SIN ever issued, so [`minimal_bytes_from_hex`] reproduces
//! it exactly and [`ByteEncoding::Minimal`] is the default everywhere.
//! [`ByteEncoding::Exact`] is the plain hex-pair decode, for callers that
//! have explicitly opted out of legacy compatibility.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from the hex/byte conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}

/// How hex text is turned back into bytes between pipeline stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteEncoding {
    /// Parse as an unsigned integer, serialize without leading zero bytes.
    /// Matches every SIN issued by the reference tooling.
    #[default]
    Minimal,
    /// Decode hex pairs one-to-one. Keeps leading zero bytes.
    Exact,
}

impl ByteEncoding {
    /// What `bytes_from_hex(hex::encode(bytes))` would return, without the
    /// round trip through text.
    pub fn normalize(self, bytes: &[u8]) -> &[u8] {
        match self {
            ByteEncoding::Minimal => {
                let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
                &bytes[start..]
            }
            ByteEncoding::Exact => bytes,
        }
    }

    /// Convert hex text into bytes under this encoding.
    pub fn bytes_from_hex(self, hex_str: &str) -> Result<Vec<u8>, HashError> {
        match self {
            ByteEncoding::Minimal => minimal_bytes_from_hex(hex_str),
            ByteEncoding::Exact => {
                hex::decode(hex_str).map_err(|e| HashError::InvalidHex(e.to_string()))
            }
        }
    }
}

/// Interpret `hex_str` as an unsigned big-endian integer and return its
/// minimal big-endian byte representation.
///
/// Leading zero bytes are dropped, odd-length input is accepted (it is just
/// a number), and zero becomes the empty byte string.
///
/// ```
/// use bitauth_protocol::crypto::hash::minimal_bytes_from_hex;
///
/// assert_eq!(minimal_bytes_from_hex("00ab").unwrap(), vec![0xab]);
/// assert_eq!(minimal_bytes_from_hex("abc").unwrap(), vec![0x0a, 0xbc]);
/// assert!(minimal_bytes_from_hex("0000").unwrap().is_empty());
/// ```
pub fn minimal_bytes_from_hex(hex_str: &str) -> Result<Vec<u8>, HashError> {
    if let Some(bad) = hex_str.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HashError::InvalidHex(format!("unexpected character {:?}", bad)));
    }

    let significant = hex_str.trim_start_matches('0');
    if significant.len() % 2 == 1 {
        let padded = format!("0{}", significant);
        hex::decode(padded).map_err(|e| HashError::InvalidHex(e.to_string()))
    } else {
        hex::decode(significant).map_err(|e| HashError::InvalidHex(e.to_string()))
    }
}

/// Render bytes the way a big integer prints itself in base 16: lowercase,
/// no leading zeros, `"0"` for zero.
pub fn minimal_hex(bytes: &[u8]) -> String {
    let full = hex::encode(bytes);
    let trimmed = full.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use bitauth_protocol::crypto::sha256;
///
/// let hash = sha256(b"BitAuth");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// The signer wants this shape: a 32-byte prehash that goes straight into
/// scalar reduction.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// SHA-256 as a lowercase hex digest (always 64 characters).
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Compute the RIPEMD-160 hash of the input data (20 bytes).
pub fn ripemd160(data: &[u8]) -> Vec<u8> {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// RIPEMD-160 as a lowercase hex digest (always 40 characters).
pub fn ripemd160_hex(data: &[u8]) -> String {
    hex::encode(ripemd160(data))
}
