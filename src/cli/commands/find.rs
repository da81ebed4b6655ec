//! `slugward find` — reverse lookup of a slug among candidate ids.
//!
//! Candidates come from `--candidates <FILE>` or stdin, one per line, so
//! the command composes with whatever exports the ids:
//!
//!   psql -Atc 'select id from quotes' | slugward find aB3dE5gH7jK9

use crate::cli::output;
use crate::cli::{load_settings, read_candidates, resolve_secret, Cli};
use crate::config::SecretKind;
use crate::errors::Result;
use crate::slug::resolve_target;

/// Execute the `find` command.
pub fn execute(cli: &Cli, slug: &str, candidates: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;
    let secret = resolve_secret(&settings, SecretKind::Slug)?;
    let ids = read_candidates(candidates)?;

    if ids.is_empty() {
        output::warning("No candidate ids were supplied.");
        output::tip("Pass --candidates <FILE> or pipe ids on stdin, one per line.");
    }

    let id = resolve_target(None, Some(slug), &ids, &secret).into_result(slug)?;
    println!("{id}");

    Ok(())
}
