//! `slugward token` — issue and verify admin tokens.

use crate::cli::output;
use crate::cli::{load_settings, resolve_secret, Cli};
use crate::config::SecretKind;
use crate::errors::{Result, SlugwardError};

/// Execute `token issue`: print a fresh token on stdout.
pub fn execute_issue(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let secret = resolve_secret(&settings, SecretKind::Admin)?;

    let token = settings.authenticator().issue(&secret);
    println!("{token}");

    output::tip(&format!(
        "Valid for {} minute(s).",
        settings.token_max_age_secs / 60
    ));
    Ok(())
}

/// Execute `token verify`: succeed only for a fresh, correctly signed token.
pub fn execute_verify(cli: &Cli, token: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let secret = resolve_secret(&settings, SecretKind::Admin)?;

    if !settings.authenticator().verify(token, &secret) {
        return Err(SlugwardError::InvalidToken);
    }

    output::success("Token is valid");
    Ok(())
}
