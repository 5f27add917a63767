//! # Cryptographic Primitives
//!
//! Everything below the identity layer: hashing, base58, secp256k1 keys,
//! nonces, and ECDSA.
//!
//! - **SHA-256 / RIPEMD-160** via `sha2` and `ripemd`.
//! - **secp256k1** arithmetic, SEC1 PEM, and DER signatures via `k256`.
//! - **Base58** via `bs58`.
//!
//! No curve math lives here. Signing hands the nonce to `k256`'s
//! prehash primitive.

pub mod base58;
pub mod hash;
pub mod keys;
pub mod nonce;
pub mod signatures;

pub use hash::{ripemd160, sha256, ByteEncoding};
pub use keys::{BitAuthKeypair, BitAuthPublicKey, KeyError, KeyMaterial};
pub use nonce::{FixedNonce, NonceSource, OsNonceSource, RngNonceSource};
pub use signatures::{sign, sign_with_pem, verify, SignatureError};
