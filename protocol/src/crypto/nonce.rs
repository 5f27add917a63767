//! # Signing Nonces
//!
//! ECDSA needs a fresh secret `k` for every signature. Reusing one, or
//! letting an attacker predict one, hands over the private key. The signer
//! therefore never picks `k` itself: it asks a [`NonceSource`].
//!
//! - [`OsNonceSource`] — the default. Uniform over `[1, n-1]` from the OS
//!   CSPRNG.
//! - [`RngNonceSource`] — same, over any caller-supplied CSPRNG.
//! - [`FixedNonce`] — always the same `k`. Only for reproducible test
//!   fixtures; signing two different messages with it leaks the key.

use k256::{FieldBytes, NonZeroScalar};
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use std::fmt;

use super::keys::scalar_bytes_from_hex;
use super::signatures::SignatureError;

/// Supplies candidate ECDSA nonces.
///
/// Returning `None` means "this attempt produced nothing usable"; the signer
/// counts it against its retry budget and asks again.
pub trait NonceSource {
    fn next_nonce(&mut self) -> Option<NonZeroScalar>;
}

/// Nonces from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn next_nonce(&mut self) -> Option<NonZeroScalar> {
        Some(NonZeroScalar::random(&mut OsRng))
    }
}

/// Nonces from any cryptographically secure RNG.
pub struct RngNonceSource<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngNonceSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> NonceSource for RngNonceSource<R> {
    fn next_nonce(&mut self) -> Option<NonZeroScalar> {
        Some(NonZeroScalar::random(&mut self.rng))
    }
}

/// A single nonce handed out on every call.
#[derive(Clone)]
pub struct FixedNonce {
    k: NonZeroScalar,
}

impl FixedNonce {
    pub fn new(k: NonZeroScalar) -> Self {
        Self { k }
    }

    /// Parse `k` from hex (unpadded is fine). Zero and values at or above
    /// the group order are rejected.
    pub fn from_hex(hex_str: &str) -> Result<Self, SignatureError> {
        let bytes: FieldBytes = scalar_bytes_from_hex(hex_str)
            .map_err(|e| SignatureError::InvalidNonce(e.to_string()))?;
        let k = Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(bytes))
            .ok_or_else(|| SignatureError::InvalidNonce("nonce out of range".to_string()))?;
        Ok(Self { k })
    }
}

impl NonceSource for FixedNonce {
    fn next_nonce(&mut self) -> Option<NonZeroScalar> {
        Some(self.k)
    }
}

impl fmt::Debug for FixedNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FixedNonce(<redacted>)")
    }
}
