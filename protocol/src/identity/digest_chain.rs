//! The hash pipeline behind a SIN.
//!
//! ```text
//! h1        = SHA256(pubkey)
//! h2        = RIPEMD160(h1)
//! versioned = 0F02 || h2
//! checksum  = SHA256(SHA256(versioned))[0..4]
//! payload   = versioned || checksum
//! ```
//!
//! Every arrow in that diagram passes through [`ByteEncoding::normalize`].
//! Under the default [`ByteEncoding::Minimal`] a digest that starts with
//! zero bytes is fed to the next hash *without* them, exactly as the
//! reference tooling did when it round-tripped each stage through hex and a
//! big integer. That is why the checksum is not simply a double SHA-256 of
//! the versioned bytes.

use crate::config::{SIN_CHECKSUM_LENGTH, SIN_TYPE_PREFIX, SIN_TYPE_PREFIX_HEX};
use crate::crypto::hash::{ripemd160, sha256, ByteEncoding};
use crate::crypto::keys::BitAuthPublicKey;

/// Every intermediate value of one run, as lowercase hex except for the
/// type prefix (which keeps its canonical `0F02` spelling).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestTrace {
    /// `SHA256(pubkey)`.
    pub public_key_digest: String,
    /// `RIPEMD160(h1)`.
    pub public_key_hash: String,
    /// `0F02` followed by the hash.
    pub versioned: String,
    /// First four bytes of the double SHA-256, 8 hex characters.
    pub checksum: String,
    payload: Vec<u8>,
}

impl DigestTrace {
    /// `versioned || checksum` as hex, the text the base58 stage encodes.
    pub fn payload_hex(&self) -> String {
        format!("{}{}", self.versioned, self.checksum)
    }

    /// `versioned || checksum` as bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Run the pipeline over a compressed public key.
pub fn trace(public_key: &BitAuthPublicKey, encoding: ByteEncoding) -> DigestTrace {
    let h1 = sha256(encoding.normalize(public_key.as_bytes()));
    let h2 = ripemd160(encoding.normalize(&h1));

    let mut payload = Vec::with_capacity(SIN_TYPE_PREFIX.len() + h2.len() + SIN_CHECKSUM_LENGTH);
    payload.extend_from_slice(&SIN_TYPE_PREFIX);
    payload.extend_from_slice(&h2);
    let check = checksum(&payload, encoding);
    payload.extend_from_slice(&check);

    DigestTrace {
        public_key_digest: hex::encode(&h1),
        public_key_hash: hex::encode(&h2),
        versioned: format!("{}{}", SIN_TYPE_PREFIX_HEX, hex::encode(&h2)),
        checksum: hex::encode(check),
        payload,
    }
}

/// Checksum of a versioned payload: the first four bytes of
/// `SHA256(SHA256(versioned))`, with each stage normalized.
pub fn checksum(versioned: &[u8], encoding: ByteEncoding) -> [u8; SIN_CHECKSUM_LENGTH] {
    let c1 = sha256(encoding.normalize(versioned));
    let c2 = sha256(encoding.normalize(&c1));
    let mut out = [0u8; SIN_CHECKSUM_LENGTH];
    out.copy_from_slice(&c2[..SIN_CHECKSUM_LENGTH]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha256_hex;

    const TEST_PUB: &str = "038d970d6ba29dcfa190c177140fd889fadd6d2590b1ee1a6a06e255dbf22b4017";

    #[test]
    fn fixture_key_intermediate_stages() {
        let pk = BitAuthPublicKey::from_hex(TEST_PUB).unwrap();
        let t = trace(&pk, ByteEncoding::Minimal);
        assert_eq!(
            t.public_key_digest,
            "dd6486d5248e134c3ce4845b5bf7f47b0b30b727cd3f7bfdbfbed585bd90eabf"
        );
        assert_eq!(t.public_key_hash, "13fa0bfb3284f03754454f934d09d0155639bf87");
        assert_eq!(t.versioned, "0F0213fa0bfb3284f03754454f934d09d0155639bf87");
        assert_eq!(t.checksum, "6fafb4f0");
        assert_eq!(
            t.payload_hex(),
            "0F0213fa0bfb3284f03754454f934d09d0155639bf876fafb4f0"
        );
        assert_eq!(t.payload().len(), crate::config::SIN_PAYLOAD_LENGTH);
    }

    /// Public key of private scalar 0x17e. Its SHA-256 starts with `00`.
    const ZERO_DIGEST_PUB: &str =
        "02886eb2e66be68b8835dde695b48cfd5cddf755b146a9726629ba933572aca3aa";

    #[test]
    fn zero_prefixed_digest_stages_minimal() {
        let pk = BitAuthPublicKey::from_hex(ZERO_DIGEST_PUB).unwrap();
        let t = trace(&pk, ByteEncoding::Minimal);
        assert_eq!(
            t.public_key_digest,
            "00ab0439dfc6cde6e6a983b33230e07123e996aed6efae1e196327b4a171e338"
        );
        // RIPEMD-160 over the 31 significant bytes.
        assert_eq!(t.public_key_hash, "f028b684f55d25d2929206d3d57a5c409547e055");
        assert_eq!(t.checksum, "8b43e3d7");
    }

    #[test]
    fn zero_prefixed_digest_stages_exact() {
        let pk = BitAuthPublicKey::from_hex(ZERO_DIGEST_PUB).unwrap();
        let t = trace(&pk, ByteEncoding::Exact);
        assert_eq!(t.public_key_hash, "8f71a8a560ca860365cde6a63833bda61ece75bf");
        assert_eq!(t.checksum, "6c23de5b");
    }

    #[test]
    fn encodings_agree_without_leading_zero_digests() {
        // None of the fixture's digests start with 00, so both encodings
        // produce the same payload.
        let pk = BitAuthPublicKey::from_hex(TEST_PUB).unwrap();
        assert_eq!(
            trace(&pk, ByteEncoding::Minimal),
            trace(&pk, ByteEncoding::Exact)
        );
    }

    #[test]
    fn minimal_checksum_skips_leading_zero_digest_bytes() {
        // sha256("286") starts with a zero byte; hashing it minimally is
        // hashing it without that byte.
        let c1 = crate::crypto::hash::sha256(b"286");
        assert_eq!(c1[0], 0);
        let minimal = sha256_hex(ByteEncoding::Minimal.normalize(&c1));
        let exact = sha256_hex(ByteEncoding::Exact.normalize(&c1));
        assert_ne!(minimal, exact);
        assert_eq!(minimal, sha256_hex(&c1[1..]));
    }

    #[test]
    fn checksum_is_double_sha_prefix_for_nonzero_digests() {
        let versioned = hex::decode("0F0213fa0bfb3284f03754454f934d09d0155639bf87").unwrap();
        let double = sha256(&sha256(&versioned));
        assert_eq!(
            checksum(&versioned, ByteEncoding::Minimal).as_slice(),
            &double[..4]
        );
    }
}
