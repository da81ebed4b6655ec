use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::ConstantTimeComparator;
use crate::errors::{Result, SlugwardError};
use crate::token::TokenAuthenticator;

/// Project-level configuration, loaded from `.slugward.toml`.
///
/// Every field has a sensible default so slugward works out-of-the-box
/// without any config file at all. Secret values never live here, only
/// the names of the environment variables that hold them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Environment variable holding the slug secret.
    #[serde(default = "default_slug_secret_var")]
    pub slug_secret_var: String,

    /// Environment variable holding the admin authentication secret.
    #[serde(default = "default_admin_secret_var")]
    pub admin_secret_var: String,

    /// Maximum admin token age in seconds (default: 4 hours).
    #[serde(default = "default_token_max_age_secs")]
    pub token_max_age_secs: u32,

    /// Compare token signatures in constant time.
    #[serde(default)]
    pub constant_time_compare: bool,

    /// Record field holding the internal id when decorating JSON records.
    #[serde(default = "default_id_field")]
    pub id_field: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_slug_secret_var() -> String {
    "SLUG_SECRET".to_string()
}

fn default_admin_secret_var() -> String {
    "ADMIN_PASSWORD".to_string()
}

fn default_token_max_age_secs() -> u32 {
    4 * 60 * 60
}

fn default_id_field() -> String {
    "id".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            slug_secret_var: default_slug_secret_var(),
            admin_secret_var: default_admin_secret_var(),
            token_max_age_secs: default_token_max_age_secs(),
            constant_time_compare: false,
            id_field: default_id_field(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".slugward.toml";

    /// Load settings from `<project_dir>/.slugward.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SlugwardError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.slug_secret_var == settings.admin_secret_var {
            return Err(SlugwardError::ConfigError(format!(
                "slug_secret_var and admin_secret_var both name '{}'",
                settings.slug_secret_var
            )));
        }

        Ok(settings)
    }

    /// Maximum token age in milliseconds.
    pub fn token_max_age_ms(&self) -> i64 {
        i64::from(self.token_max_age_secs) * 1000
    }

    /// Build the token authenticator described by these settings.
    pub fn authenticator(&self) -> TokenAuthenticator {
        let auth = TokenAuthenticator::new().with_max_age_ms(self.token_max_age_ms());
        if self.constant_time_compare {
            auth.with_comparator(ConstantTimeComparator)
        } else {
            auth
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
