//! # CLI Interface
//!
//! Defines the command-line argument structure for `bitauth` using `clap`
//! derive. Every key-taking subcommand reads a SEC1 PEM file, either from
//! `--pem` or from the `BITAUTH_PEM` environment variable.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// BitAuth key utilities.
///
/// Generates secp256k1 keys, derives SINs, and signs or verifies messages
/// the way BitAuth clients and servers do.
#[derive(Parser, Debug)]
#[command(
    name = "bitauth",
    about = "BitAuth key utilities",
    version,
    propagate_version = true
)]
pub struct BitAuthCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "BITAUTH_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format (logs always go to stderr).
    #[arg(
        long,
        global = true,
        env = "BITAUTH_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new secp256k1 key as SEC1 PEM.
    Generate(GenerateArgs),
    /// Print the private and public key hex of a PEM key.
    Keys(PemArgs),
    /// Print the SIN of a PEM key or a compressed public key.
    Sin(SinArgs),
    /// Sign a message, printing hex DER.
    Sign(SignArgs),
    /// Verify a hex DER signature. Exits non-zero on failure.
    Verify(VerifyArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Write the PEM here (mode 0600) instead of stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Overwrite `--out` if it already exists.
    #[arg(long, requires = "out")]
    pub force: bool,
}

/// A PEM key file.
#[derive(Args, Debug)]
pub struct PemArgs {
    /// Path to a SEC1 PEM private key.
    #[arg(long, short = 'k', env = "BITAUTH_PEM")]
    pub pem: Option<PathBuf>,
}

/// Arguments for `sin`.
#[derive(Args, Debug)]
pub struct SinArgs {
    #[command(flatten)]
    pub key: PemArgs,

    /// Compressed public key hex. Takes precedence over `--pem`.
    #[arg(long, short = 'p')]
    pub public_key: Option<String>,
}

/// Arguments for `sign`.
#[derive(Args, Debug)]
pub struct SignArgs {
    #[command(flatten)]
    pub key: PemArgs,

    /// Message to sign (UTF-8, signed as raw bytes).
    #[arg(long, short = 'm')]
    pub message: String,
}

/// Arguments for `verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Compressed public key hex of the signer.
    #[arg(long, short = 'p')]
    pub public_key: String,

    /// Hex DER signature.
    #[arg(long, short = 's')]
    pub signature: String,

    /// The message that was signed.
    #[arg(long, short = 'm')]
    pub message: String,
}
