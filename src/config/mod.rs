//! Configuration — project settings and process secrets.

pub mod secrets;
pub mod settings;

pub use secrets::{check_secret, validate_secrets, SecretKind, Secrets};
pub use settings::Settings;
