//! `slugward gen-secret` — print a random secret.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::errors::{Result, SlugwardError};

/// Smallest accepted secret size in bytes.
const MIN_BYTES: usize = 16;

/// Largest accepted secret size in bytes.
const MAX_BYTES: usize = 1024;

/// Execute the `gen-secret` command.
pub fn execute(bytes: usize) -> Result<()> {
    println!("{}", generate_secret(bytes)?.as_str());
    Ok(())
}

/// `bytes` random bytes as URL-safe base64 without padding.
pub fn generate_secret(bytes: usize) -> Result<Zeroizing<String>> {
    if !(MIN_BYTES..=MAX_BYTES).contains(&bytes) {
        return Err(SlugwardError::CommandFailed(format!(
            "secret size must be between {MIN_BYTES} and {MAX_BYTES} bytes (got {bytes})"
        )));
    }

    let mut raw = Zeroizing::new(vec![0u8; bytes]);
    rand::rng().fill_bytes(&mut raw);
    Ok(Zeroizing::new(URL_SAFE_NO_PAD.encode(raw.as_slice())))
}
