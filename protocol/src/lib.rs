// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # BitAuth Protocol — Core Library
//!
//! BitAuth is decentralized authentication with nothing but a keypair: the
//! client holds a secp256k1 key, the server knows the client by a SIN
//! derived from the public key, and every request carries an ECDSA
//! signature. No passwords, no shared secrets, no registration server.
//!
//! ## Architecture
//!
//! - **crypto** — SHA-256, RIPEMD-160, base58, secp256k1 keys, nonces,
//!   ECDSA signing and verification.
//! - **identity** — the SIN digest chain and the [`identity::Sin`] type.
//! - **config** — protocol constants. The SIN format lives here.
//! - **error** — a crate-wide error wrapping the per-module ones.
//!
//! ## Quick tour
//!
//! ```
//! use bitauth_protocol::crypto::{sign, verify, BitAuthKeypair};
//! use bitauth_protocol::identity::derive_sin;
//!
//! let kp = BitAuthKeypair::generate();
//! let material = kp.key_material();
//!
//! let sin = derive_sin(&material.public_key_hex).unwrap();
//! assert!(sin.as_str().starts_with('T'));
//!
//! let sig = sign(b"POST /tokens", &material.private_key_hex).unwrap();
//! assert!(verify(b"POST /tokens", &sig, &material.public_key_hex).is_ok());
//! ```
//!
//! ## Design Philosophy
//!
//! 1. Byte-for-byte compatibility with SINs already issued. Quirks included.
//! 2. Stateless functions. The only side effect is drawing signing nonces.
//! 3. Key material never reaches a log line or a `Debug` string.

pub mod config;
pub mod crypto;
pub mod error;
pub mod identity;

pub use error::{BitAuthError, Result};
