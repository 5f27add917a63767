//! PEM key files on disk.
//!
//! Reading maps "no path given" to `None` so the protocol layer reports
//! missing key material itself. Writing refuses to clobber an existing key
//! unless asked, and restricts the file to its owner on Unix.

use anyhow::{bail, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Read a PEM file if a path was supplied.
pub fn read_pem(path: Option<&Path>) -> Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let pem = fs::read_to_string(path)
        .with_context(|| format!("failed to read PEM key from {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = pem.len(), "PEM key loaded");
    Ok(Some(pem))
}

/// Write a PEM private key to `path` with mode 0600.
pub fn write_pem(path: &Path, pem: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "refusing to overwrite existing key file {} (pass --force)",
            path.display()
        );
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("failed to create key file {}", path.display()))?;
    file.write_all(pem.as_bytes())
        .with_context(|| format!("failed to write key file {}", path.display()))?;

    // `mode` only applies on creation; tighten an overwritten file too.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    tracing::info!(path = %path.display(), "private key written");
    Ok(())
}
