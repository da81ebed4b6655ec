pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod logging;
pub mod slug;
pub mod token;

pub use slug::{
    attach_slugs, find_id_by_slug, generate_slug, is_valid_slug_format, verify_slug, Slugged,
};
pub use token::{issue_token, verify_token, TokenAuthenticator};
