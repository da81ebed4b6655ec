//! `slugward check` — syntactic slug check, no secret involved.

use crate::cli::output;
use crate::errors::{Result, SlugwardError};
use crate::slug::is_valid_slug_format;

/// Execute the `check` command.
pub fn execute(slug: &str) -> Result<()> {
    if !is_valid_slug_format(slug) {
        return Err(SlugwardError::MalformedSlug(slug.to_string()));
    }

    output::success("Slug format is valid");
    Ok(())
}
