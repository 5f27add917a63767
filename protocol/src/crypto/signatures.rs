//! # Digital Signatures
//!
//! ECDSA over secp256k1 with SHA-256, the way BitAuth request signing works:
//! hash the message, sign the digest with the private scalar, ship the
//! signature as hex-encoded DER.
//!
//! ## Nonces
//!
//! This is *not* RFC 6979. Every attempt draws a fresh `k` from a
//! [`NonceSource`], so signing the same message twice gives two different
//! (both valid) signatures. If a nonce yields `r == 0` or `s == 0` the
//! signer silently draws another, up to [`MAX_SIGNING_ATTEMPTS`] times.
//! Tests that need byte-exact signatures pass a [`FixedNonce`](super::nonce::FixedNonce).
//!
//! ## Low-S
//!
//! `s` is always in the lower half of the group order (`k256` folds it).
//! `(r, n - s)` is the same signature mathematically, and strict verifiers
//! (Bitcoin's BIP-62 rules, `k256` itself) reject the high form.
//! Verification here accepts both.

use k256::ecdsa::hazmat::SignPrimitive;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::Signature;
use k256::{FieldBytes, NonZeroScalar, Scalar};
use thiserror::Error;

use super::hash::sha256_array;
use super::keys::{BitAuthKeypair, BitAuthPublicKey, KeyError};
use super::nonce::{NonceSource, OsNonceSource};
use crate::config::{MAX_DER_SIGNATURE_LENGTH, MAX_SIGNING_ATTEMPTS};

/// Errors during signature operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("invalid nonce: {0}")]
    InvalidNonce(String),

    #[error("no usable nonce after {attempts} attempts")]
    NonceExhausted { attempts: usize },

    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    #[error("signature verification failed")]
    VerificationFailed,
}

/// Sign `message` with a hex private key, returning hex DER.
///
/// # Example
///
/// ```
/// use bitauth_protocol::crypto::keys::BitAuthKeypair;
/// use bitauth_protocol::crypto::signatures::{sign, verify};
///
/// let kp = BitAuthKeypair::generate();
/// let sig = sign(b"GET /invoices", &kp.private_key_hex()).unwrap();
/// assert!(verify(b"GET /invoices", &sig, &kp.public_key_hex()).is_ok());
/// ```
pub fn sign(message: &[u8], private_key_hex: &str) -> Result<String, SignatureError> {
    sign_with_nonce_source(message, private_key_hex, &mut OsNonceSource)
}

/// [`sign`] with an explicit nonce source.
pub fn sign_with_nonce_source<N>(
    message: &[u8],
    private_key_hex: &str,
    nonces: &mut N,
) -> Result<String, SignatureError>
where
    N: NonceSource + ?Sized,
{
    let keypair = BitAuthKeypair::from_private_key_hex(private_key_hex)?;
    sign_with_keypair(&keypair, message, nonces)
}

/// Sign with a PEM-encoded private key.
pub fn sign_with_pem(pem: Option<&str>, message: &[u8]) -> Result<String, SignatureError> {
    let keypair = BitAuthKeypair::from_pem(pem)?;
    sign_with_keypair(&keypair, message, &mut OsNonceSource)
}

/// Sign with an already-loaded keypair.
pub fn sign_with_keypair<N>(
    keypair: &BitAuthKeypair,
    message: &[u8],
    nonces: &mut N,
) -> Result<String, SignatureError>
where
    N: NonceSource + ?Sized,
{
    let digest = sha256_array(message);
    let signature = sign_prehash(&keypair.scalar(), &digest, nonces)?;
    Ok(hex::encode(signature.to_der().as_bytes()))
}

/// Verify hex DER `signature_hex` over `message` against compressed public
/// key hex. High-S signatures are accepted.
pub fn verify(
    message: &[u8],
    signature_hex: &str,
    public_key_hex: &str,
) -> Result<(), SignatureError> {
    let public_key = BitAuthPublicKey::from_hex(public_key_hex)?;
    verify_with_public_key(&public_key, message, signature_hex)
}

/// [`verify`] against a parsed public key.
pub fn verify_with_public_key(
    public_key: &BitAuthPublicKey,
    message: &[u8],
    signature_hex: &str,
) -> Result<(), SignatureError> {
    if signature_hex.len() > MAX_DER_SIGNATURE_LENGTH * 2 {
        return Err(SignatureError::InvalidSignatureEncoding(format!(
            "longer than {} bytes",
            MAX_DER_SIGNATURE_LENGTH
        )));
    }
    let der = hex::decode(signature_hex)
        .map_err(|e| SignatureError::InvalidSignatureEncoding(e.to_string()))?;
    let signature = Signature::from_der(&der)
        .map_err(|_| SignatureError::InvalidSignatureEncoding("malformed DER".to_string()))?;
    let signature = signature.normalize_s().unwrap_or(signature);

    let verifying_key = public_key.to_verifying_key()?;
    verifying_key
        .verify_prehash(&sha256_array(message), &signature)
        .map_err(|_| SignatureError::VerificationFailed)
}

/// Run the nonce-retry loop over a 32-byte digest.
fn sign_prehash<N>(
    d: &NonZeroScalar,
    digest: &[u8; 32],
    nonces: &mut N,
) -> Result<Signature, SignatureError>
where
    N: NonceSource + ?Sized,
{
    let z = FieldBytes::from(*digest);

    for attempt in 1..=MAX_SIGNING_ATTEMPTS {
        let Some(k) = nonces.next_nonce() else {
            tracing::debug!(attempt, "nonce source returned nothing, retrying");
            continue;
        };
        match sign_with_nonce(d.as_ref(), &z, &k) {
            Some(signature) => {
                tracing::trace!(attempt, "message signed");
                return Ok(signature);
            }
            None => tracing::debug!(attempt, "degenerate nonce, retrying"),
        }
    }

    tracing::warn!(
        attempts = MAX_SIGNING_ATTEMPTS,
        "nonce source exhausted without a usable nonce"
    );
    Err(SignatureError::NonceExhausted {
        attempts: MAX_SIGNING_ATTEMPTS,
    })
}

/// One ECDSA attempt with nonce `k`. `None` when `k` yields `r == 0` or
/// `s == 0`. The result is already low-S.
fn sign_with_nonce(d: &Scalar, z: &FieldBytes, k: &Scalar) -> Option<Signature> {
    d.try_sign_prehashed(*k, z).ok().map(|(signature, _)| signature)
}
