//! Crate-wide error type.
//!
//! Each module has its own error enum. [`BitAuthError`] wraps all of them
//! for callers that drive the whole pipeline and want a single `?` target.

use thiserror::Error;

use crate::crypto::base58::Base58Error;
use crate::crypto::hash::HashError;
use crate::crypto::keys::KeyError;
use crate::crypto::signatures::SignatureError;
use crate::identity::sin::SinError;

/// Any failure from this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitAuthError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Sin(#[from] SinError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Base58(#[from] Base58Error),

    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Shorthand result alias.
pub type Result<T> = std::result::Result<T, BitAuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn load(pem: Option<&str>) -> Result<String> {
        let sin = crate::identity::sin_from_pem(pem)?;
        Ok(sin.to_string())
    }

    #[test]
    fn module_errors_convert() {
        let err = load(None).unwrap_err();
        assert_eq!(
            err,
            BitAuthError::Sin(SinError::Key(KeyError::MissingKeyMaterial))
        );
        assert_eq!(err.to_string(), KeyError::MissingKeyMaterial.to_string());
    }

    #[test]
    fn signature_errors_convert() {
        let err: BitAuthError = SignatureError::VerificationFailed.into();
        assert!(matches!(err, BitAuthError::Signature(_)));
    }
}
