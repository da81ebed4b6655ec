//! Turning an `id`-or-`slug` request into a concrete record id.
//!
//! Admin requests may name a record either by its internal id (older
//! clients) or by its public slug. An explicit id always wins.

use super::codec::{find_id_by_slug, is_valid_slug_format};
use crate::errors::SlugwardError;

/// Outcome of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The record id to act on.
    Found(&'a str),
    /// A slug was given but it is not 12 alphabet characters.
    MalformedSlug,
    /// The slug is well formed but no candidate produces it.
    NotFound,
    /// Neither an id nor a slug was supplied.
    Missing,
}

impl<'a> Resolution<'a> {
    /// The resolved id, if any.
    pub fn id(&self) -> Option<&'a str> {
        match self {
            Resolution::Found(id) => Some(*id),
            _ => None,
        }
    }

    /// Convert into a `Result`, keeping the slug for the error message.
    pub fn into_result(self, slug: &str) -> crate::errors::Result<&'a str> {
        match self {
            Resolution::Found(id) => Ok(id),
            Resolution::MalformedSlug => Err(SlugwardError::MalformedSlug(slug.to_string())),
            Resolution::NotFound => Err(SlugwardError::SlugNotFound(slug.to_string())),
            Resolution::Missing => Err(SlugwardError::CommandFailed(
                "an id or a slug is required".into(),
            )),
        }
    }
}

/// Resolve a target given as an optional id and/or an optional slug.
///
/// Empty strings count as absent. `candidates` is only scanned when the
/// slug is needed.
pub fn resolve_target<'a, S: AsRef<str>>(
    id: Option<&'a str>,
    slug: Option<&str>,
    candidates: &'a [S],
    secret: &str,
) -> Resolution<'a> {
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        return Resolution::Found(id);
    }

    let Some(slug) = slug.filter(|s| !s.is_empty()) else {
        return Resolution::Missing;
    };

    if !is_valid_slug_format(slug) {
        return Resolution::MalformedSlug;
    }

    match find_id_by_slug(slug, candidates, secret) {
        Some(id) => Resolution::Found(id),
        None => Resolution::NotFound,
    }
}
