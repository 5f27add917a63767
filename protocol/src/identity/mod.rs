//! # Identity Module
//!
//! BitAuth identities. A participant is a secp256k1 keypair; the rest of the
//! world knows them by their SIN.
//!
//! The identity stack is layered:
//!
//! 1. **Keypair** — [`crate::crypto::keys`]. Signs requests.
//! 2. **Digest chain** — SHA-256, RIPEMD-160, type prefix, checksum.
//! 3. **SIN** — the base58 rendering of the digest chain output.
//!
//! ## Design Decisions
//!
//! - The legacy "minimal bytes" handling between hash stages is the default.
//!   Switching to [`ByteEncoding::Exact`](crate::crypto::ByteEncoding::Exact)
//!   changes the SIN of roughly one key in 128, so it is opt-in per call.
//! - SIN parsing validates the checksum but cannot recover the key.

pub mod digest_chain;
pub mod sin;

pub use crate::crypto::keys::{BitAuthKeypair, BitAuthPublicKey, KeyMaterial};
pub use digest_chain::DigestTrace;
pub use sin::{derive_sin, derive_sin_with, sin_from_pem, Sin, SinError};
