//! # SIN — Service Identification Number
//!
//! A SIN is the public, shareable name of a BitAuth identity. It is derived
//! from the compressed public key and nothing else:
//!
//! ```text
//! compressed pubkey (33 bytes)
//!     -> digest chain -> 0F02 || HASH160 || checksum (26 bytes)
//!     -> base58       -> Tf...  (35 characters)
//! ```
//!
//! The `0F02` prefix marks "SIN, ephemeral, version 2" and pins the first
//! base58 character to `T` for every key.
//!
//! Derivation is a pure function. Parsing goes the other way only as far as
//! the checksum: a SIN cannot be turned back into a public key, but a
//! presented public key can be checked against it with
//! [`Sin::matches_public_key`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::digest_chain;
use crate::config::{SIN_CHECKSUM_LENGTH, SIN_PAYLOAD_LENGTH, SIN_TYPE_PREFIX};
use crate::crypto::base58;
use crate::crypto::hash::ByteEncoding;
use crate::crypto::keys::{BitAuthKeypair, BitAuthPublicKey, KeyError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while deriving or parsing a SIN.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SinError {
    /// The public key hex is not a compressed secp256k1 point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Loading key material failed before derivation started.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The string is not valid base58.
    #[error("invalid SIN encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded payload has the wrong size.
    #[error("invalid SIN length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },

    /// The payload does not start with `0F02`.
    #[error("invalid SIN type prefix: {0}")]
    InvalidTypePrefix(String),

    /// The trailing four bytes do not match the payload.
    #[error("SIN checksum mismatch")]
    ChecksumMismatch,
}

// ---------------------------------------------------------------------------
// Sin
// ---------------------------------------------------------------------------

/// A base58-encoded BitAuth identifier.
///
/// # Examples
///
/// ```
/// use bitauth_protocol::identity::{derive_sin, Sin};
///
/// let sin = derive_sin(
///     "038d970d6ba29dcfa190c177140fd889fadd6d2590b1ee1a6a06e255dbf22b4017",
/// )
/// .unwrap();
/// assert_eq!(sin.as_str(), "TeyN4LPrXiG5t2yuSamKqP3ynVk3F52iHrX");
///
/// let parsed: Sin = "TeyN4LPrXiG5t2yuSamKqP3ynVk3F52iHrX".parse().unwrap();
/// assert_eq!(sin, parsed);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sin {
    encoded: String,
}

impl Sin {
    /// Derive the SIN of a public key using the legacy byte encoding.
    pub fn from_public_key(public_key: &BitAuthPublicKey) -> Self {
        Self::from_public_key_with(public_key, ByteEncoding::default())
    }

    /// Derive with an explicit byte encoding.
    pub fn from_public_key_with(public_key: &BitAuthPublicKey, encoding: ByteEncoding) -> Self {
        let trace = digest_chain::trace(public_key, encoding);
        let encoded = base58::encode(trace.payload());
        tracing::trace!(sin = %encoded, ?encoding, "derived SIN");
        Self { encoded }
    }

    /// Derive from a keypair.
    pub fn from_keypair(keypair: &BitAuthKeypair) -> Self {
        Self::from_public_key(&keypair.public_key())
    }

    /// Parse and validate a SIN string against the legacy checksum rule.
    pub fn parse(text: &str) -> Result<Self, SinError> {
        Self::parse_with(text, ByteEncoding::default())
    }

    /// Parse and validate with an explicit byte encoding for the checksum.
    pub fn parse_with(text: &str, encoding: ByteEncoding) -> Result<Self, SinError> {
        let payload =
            base58::decode(text).map_err(|e| SinError::InvalidEncoding(e.to_string()))?;

        if payload.len() != SIN_PAYLOAD_LENGTH {
            return Err(SinError::InvalidLength {
                expected: SIN_PAYLOAD_LENGTH,
                got: payload.len(),
            });
        }
        if payload[..SIN_TYPE_PREFIX.len()] != SIN_TYPE_PREFIX {
            return Err(SinError::InvalidTypePrefix(hex::encode(
                &payload[..SIN_TYPE_PREFIX.len()],
            )));
        }

        let (versioned, check) = payload.split_at(SIN_PAYLOAD_LENGTH - SIN_CHECKSUM_LENGTH);
        if digest_chain::checksum(versioned, encoding) != check {
            return Err(SinError::ChecksumMismatch);
        }

        Ok(Self {
            encoded: text.to_string(),
        })
    }

    /// Does `public_key` derive to this SIN?
    pub fn matches_public_key(&self, public_key: &BitAuthPublicKey) -> bool {
        Self::from_public_key(public_key) == *self
    }

    /// The base58 text.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl FromStr for Sin {
    type Err = SinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sin::parse(s)
    }
}

impl fmt::Display for Sin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl fmt::Debug for Sin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sin({})", self.encoded)
    }
}

impl Serialize for Sin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Sin {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Sin::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Derive a SIN from compressed public key hex.
///
/// Fails with [`SinError::InvalidPublicKey`] for anything that is not 66 hex
/// characters encoding a point on secp256k1 with a `02`/`03` prefix.
pub fn derive_sin(public_key_hex: &str) -> Result<Sin, SinError> {
    derive_sin_with(public_key_hex, ByteEncoding::default())
}

/// [`derive_sin`] with an explicit byte encoding.
pub fn derive_sin_with(public_key_hex: &str, encoding: ByteEncoding) -> Result<Sin, SinError> {
    let public_key = BitAuthPublicKey::from_hex(public_key_hex).map_err(|e| match e {
        KeyError::InvalidPublicKey(reason) => SinError::InvalidPublicKey(reason),
        other => SinError::InvalidPublicKey(other.to_string()),
    })?;
    Ok(Sin::from_public_key_with(&public_key, encoding))
}

/// Derive a SIN straight from SEC1 PEM.
pub fn sin_from_pem(pem: Option<&str>) -> Result<Sin, SinError> {
    let keypair = BitAuthKeypair::from_pem(pem)?;
    Ok(Sin::from_keypair(&keypair))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
