//! `slugward slug` — print the public slug of an internal id.

use crate::cli::{load_settings, resolve_secret, Cli};
use crate::config::SecretKind;
use crate::errors::Result;
use crate::slug::generate_slug;

/// Execute the `slug` command.
pub fn execute(cli: &Cli, id: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let secret = resolve_secret(&settings, SecretKind::Slug)?;

    println!("{}", generate_slug(id, &secret));

    Ok(())
}
