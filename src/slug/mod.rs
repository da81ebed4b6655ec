//! Slug module — public tokens standing in for internal record ids.
//!
//! This module provides:
//! - Slug generation, verification, reverse search and format checks (`codec`)
//! - Record decoration with a `slug` field (`records`)
//! - `id`-or-`slug` request target resolution (`resolve`)

pub mod codec;
pub mod records;
pub mod resolve;

// Re-export the most commonly used items.
pub use codec::{
    find_id_by_slug, generate_slug, is_valid_slug_format, verify_slug, SLUG_ALPHABET,
    SLUG_LENGTH,
};
pub use records::{attach_slugs, attach_slugs_json, HasId, Slugged};
pub use resolve::{resolve_target, Resolution};
