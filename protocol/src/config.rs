//! # Protocol Configuration & Constants
//!
//! Every magic number in the BitAuth pipeline lives here. The SIN format is
//! a wire-level identifier that other implementations recompute
//! independently, so changing any of these values changes every identity
//! derived from them. Treat edits here as a protocol version bump.

// ---------------------------------------------------------------------------
// Curve & Key Parameters
// ---------------------------------------------------------------------------

/// The only curve this crate speaks. BitAuth identities are secp256k1 keys,
/// same as Bitcoin.
pub const CURVE_NAME: &str = "secp256k1";

/// Private scalar length in bytes (curve order byte length).
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// SEC1 compressed public key length: 1-byte parity prefix + 32-byte x.
pub const COMPRESSED_PUBLIC_KEY_LENGTH: usize = 33;

/// Compressed public key length in hex characters.
pub const COMPRESSED_PUBLIC_KEY_HEX_LENGTH: usize = COMPRESSED_PUBLIC_KEY_LENGTH * 2;

/// SEC1 prefix for a compressed point with even y.
pub const COMPRESSED_EVEN_PREFIX: u8 = 0x02;

/// SEC1 prefix for a compressed point with odd y.
pub const COMPRESSED_ODD_PREFIX: u8 = 0x03;

/// Upper bound on a DER-encoded secp256k1 ECDSA signature. Two 33-byte
/// INTEGERs plus headers. Longer input is rejected before DER parsing.
pub const MAX_DER_SIGNATURE_LENGTH: usize = 72;

// ---------------------------------------------------------------------------
// SIN Format
// ---------------------------------------------------------------------------

/// SIN type prefix, as hex text: `0x0F` (SIN marker) followed by `0x02`
/// (ephemeral identity, version 2).
pub const SIN_TYPE_PREFIX_HEX: &str = "0F02";

/// SIN type prefix as raw bytes.
pub const SIN_TYPE_PREFIX: [u8; 2] = [0x0F, 0x02];

/// RIPEMD-160 output length. The SIN body is exactly one of these.
pub const SIN_HASH_LENGTH: usize = 20;

/// Checksum width in hex characters (4 bytes of the double SHA-256).
pub const SIN_CHECKSUM_HEX_LENGTH: usize = 8;

/// Checksum width in bytes.
pub const SIN_CHECKSUM_LENGTH: usize = SIN_CHECKSUM_HEX_LENGTH / 2;

/// Total decoded SIN payload length: prefix + hash + checksum.
pub const SIN_PAYLOAD_LENGTH: usize = SIN_TYPE_PREFIX.len() + SIN_HASH_LENGTH + SIN_CHECKSUM_LENGTH;

// ---------------------------------------------------------------------------
// Base58
// ---------------------------------------------------------------------------

/// The Bitcoin base58 alphabet. No `0`, `O`, `I`, or `l`.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// How many nonces the signer will try before giving up.
///
/// A degenerate nonce (one that yields `r == 0` or `s == 0`) has probability
/// around 2^-256 per attempt with a healthy RNG, so hitting this bound means
/// the nonce source is broken, not unlucky.
pub const MAX_SIGNING_ATTEMPTS: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_hex_matches_bytes() {
        assert_eq!(hex::decode(SIN_TYPE_PREFIX_HEX).unwrap(), SIN_TYPE_PREFIX);
    }

    #[test]
    fn test_alphabet_has_no_ambiguous_characters() {
        for c in [b'0', b'O', b'I', b'l'] {
            assert!(!BASE58_ALPHABET.contains(&c));
        }
    }

    #[test]
    fn test_payload_length() {
        // 2 + 20 + 4. If this changes, every SIN in the wild breaks.
        assert_eq!(SIN_PAYLOAD_LENGTH, 26);
        assert_eq!(COMPRESSED_PUBLIC_KEY_HEX_LENGTH, 66);
    }

    #[test]
    fn test_signing_attempts_nonzero() {
        assert!(MAX_SIGNING_ATTEMPTS > 0);
    }
}
