use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in slugward.
///
/// The slug and token operations themselves never fail; these cover the
/// surface around them (configuration, record files, the CLI).
#[derive(Debug, Error)]
pub enum SlugwardError {
    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration:\n{}", bullet_list(.0))]
    InvalidSecrets(Vec<String>),

    #[error("Secret variable '{0}' is not set")]
    SecretMissing(String),

    // --- Record errors ---
    #[error("Record {index} is not a JSON object")]
    RecordNotObject { index: usize },

    #[error("Record {index} has no string field '{field}'")]
    RecordMissingId { index: usize, field: String },

    #[error("Expected a JSON array of records in {0}")]
    NotARecordArray(PathBuf),

    // --- Slug errors ---
    #[error("Malformed slug '{0}' — expected 12 characters from [a-zA-Z0-9]")]
    MalformedSlug(String),

    #[error("No candidate id matches slug '{0}'")]
    SlugNotFound(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Slug does not match id")]
    SlugMismatch,
}

/// Render each problem on its own indented line.
fn bullet_list(problems: &[String]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convenience type alias for slugward results.
pub type Result<T> = std::result::Result<T, SlugwardError>;
