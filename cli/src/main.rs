// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # BitAuth CLI
//!
//! Entry point for the `bitauth` binary. Parses CLI arguments, initializes
//! logging, and runs one key operation.
//!
//! The binary supports six subcommands:
//!
//! - `generate` — create a new SEC1 PEM private key
//! - `keys`     — print the hex key pair of a PEM key
//! - `sin`      — derive the SIN of a PEM key or public key
//! - `sign`     — sign a message
//! - `verify`   — verify a signature (non-zero exit on failure)
//! - `version`  — print build version information
//!
//! Results go to stdout, as plain text or as JSON with `--json`. Logs go to
//! stderr.

mod cli;
mod keyfile;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use bitauth_protocol::crypto::keys::{self, BitAuthKeypair, BitAuthPublicKey};
use bitauth_protocol::crypto::signatures;
use bitauth_protocol::identity::{derive_sin, Sin};

use cli::{BitAuthCli, Commands};

fn main() -> Result<()> {
    let cli = BitAuthCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format)?;

    let json = cli.json;
    match cli.command {
        Commands::Generate(args) => generate(args, json),
        Commands::Keys(args) => show_keys(args, json),
        Commands::Sin(args) => show_sin(args, json),
        Commands::Sign(args) => sign(args, json),
        Commands::Verify(args) => verify(args, json),
        Commands::Version => print_version(json),
    }
}

/// Generates a key and prints it, or writes it to `--out`.
fn generate(args: cli::GenerateArgs, json: bool) -> Result<()> {
    let keypair = BitAuthKeypair::generate();
    let pem = keypair.to_pem().context("failed to encode generated key")?;
    let sin = Sin::from_keypair(&keypair);

    tracing::info!(sin = %sin, "keypair generated");

    match &args.out {
        Some(path) => {
            keyfile::write_pem(path, &pem, args.force)?;
            #[derive(Serialize)]
            struct Generated<'a> {
                path: String,
                public_key: String,
                sin: &'a Sin,
            }
            if json {
                emit_json(&Generated {
                    path: path.display().to_string(),
                    public_key: keypair.public_key_hex(),
                    sin: &sin,
                })?;
            } else {
                println!("Key written to {}", path.display());
                println!("  Public key : {}", keypair.public_key_hex());
                println!("  SIN        : {}", sin);
            }
        }
        None => {
            if json {
                #[derive(Serialize)]
                struct GeneratedPem<'a> {
                    pem: &'a str,
                    sin: &'a Sin,
                }
                emit_json(&GeneratedPem { pem: &pem, sin: &sin })?;
            } else {
                print!("{}", pem);
            }
        }
    }
    Ok(())
}

/// Prints the private and public key hex of a PEM key.
fn show_keys(args: cli::PemArgs, json: bool) -> Result<()> {
    let pem = keyfile::read_pem(args.pem.as_deref())?;
    let keypair = BitAuthKeypair::from_pem(pem.as_deref())?;
    let material = keypair.key_material();

    if json {
        emit_json(&material)?;
    } else {
        println!("private_key: {}", material.private_key_hex);
        println!("public_key:  {}", material.public_key_hex);
    }
    Ok(())
}

/// Prints the SIN of a public key, or of the key in a PEM file.
fn show_sin(args: cli::SinArgs, json: bool) -> Result<()> {
    let sin = match &args.public_key {
        Some(public_key) => derive_sin(public_key)?,
        None => {
            let pem = keyfile::read_pem(args.key.pem.as_deref())?;
            bitauth_protocol::identity::sin_from_pem(pem.as_deref())?
        }
    };

    if json {
        #[derive(Serialize)]
        struct SinOutput<'a> {
            sin: &'a Sin,
        }
        emit_json(&SinOutput { sin: &sin })?;
    } else {
        println!("{}", sin);
    }
    Ok(())
}

/// Signs `--message` with the PEM key.
fn sign(args: cli::SignArgs, json: bool) -> Result<()> {
    let pem = keyfile::read_pem(args.key.pem.as_deref())?;
    let keypair = BitAuthKeypair::from_pem(pem.as_deref())?;
    let signature = signatures::sign(args.message.as_bytes(), &keypair.private_key_hex())?;

    tracing::debug!(
        message_len = args.message.len(),
        signature_len = signature.len() / 2,
        "message signed"
    );

    if json {
        #[derive(Serialize)]
        struct Signed {
            signature: String,
            public_key: String,
        }
        emit_json(&Signed {
            signature,
            public_key: keypair.public_key_hex(),
        })?;
    } else {
        println!("{}", signature);
    }
    Ok(())
}

/// Verifies a signature. A failed check is returned as an error so the
/// process exits non-zero.
fn verify(args: cli::VerifyArgs, json: bool) -> Result<()> {
    let public_key = BitAuthPublicKey::from_hex(&args.public_key)?;
    let outcome =
        signatures::verify_with_public_key(&public_key, args.message.as_bytes(), &args.signature);

    if json {
        #[derive(Serialize)]
        struct Verified<'a> {
            valid: bool,
            sin: Sin,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<&'a str>,
        }
        let error = outcome.as_ref().err().map(|e| e.to_string());
        emit_json(&Verified {
            valid: outcome.is_ok(),
            sin: Sin::from_public_key(&public_key),
            error: error.as_deref(),
        })?;
    } else if outcome.is_ok() {
        println!("OK");
    }

    outcome.context("signature verification failed")?;
    Ok(())
}

/// Prints version information to stdout.
fn print_version(json: bool) -> Result<()> {
    if json {
        emit_json(&serde_json::json!({
            "bitauth": env!("CARGO_PKG_VERSION"),
            "curve": bitauth_protocol::config::CURVE_NAME,
            "sin_type": bitauth_protocol::config::SIN_TYPE_PREFIX_HEX,
            "rustc": rustc_version(),
        }))
    } else {
        println!("bitauth   {}", env!("CARGO_PKG_VERSION"));
        println!("curve     {}", bitauth_protocol::config::CURVE_NAME);
        println!("sin type  {}", bitauth_protocol::config::SIN_TYPE_PREFIX_HEX);
        println!("rustc     {}", rustc_version());
        Ok(())
    }
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", text);
    Ok(())
}
