//! `slugward verify` — check that a slug belongs to an id.

use crate::cli::output;
use crate::cli::{load_settings, resolve_secret, Cli};
use crate::config::SecretKind;
use crate::errors::{Result, SlugwardError};
use crate::slug::verify_slug;

/// Execute the `verify` command.
pub fn execute(cli: &Cli, slug: &str, id: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let secret = resolve_secret(&settings, SecretKind::Slug)?;

    if !verify_slug(slug, id, &secret) {
        return Err(SlugwardError::SlugMismatch);
    }

    output::success("Slug matches id");
    Ok(())
}
