//! Loading and validating the two process secrets.
//!
//! The slug secret keys public slugs; the admin secret keys admin
//! tokens. Both come from environment variables named in `Settings`,
//! must be set, must not be template placeholders, and must differ.

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use super::settings::Settings;
use crate::errors::{Result, SlugwardError};

/// Prefix of the placeholder values shipped in example env files.
const PLACEHOLDER_PREFIX: &str = "your-";

/// Which of the two secrets is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    Slug,
    Admin,
}

impl SecretKind {
    /// Environment variable holding this secret.
    pub fn var_name(self, settings: &Settings) -> &str {
        match self {
            SecretKind::Slug => &settings.slug_secret_var,
            SecretKind::Admin => &settings.admin_secret_var,
        }
    }

    /// The other secret.
    pub fn other(self) -> SecretKind {
        match self {
            SecretKind::Slug => SecretKind::Admin,
            SecretKind::Admin => SecretKind::Slug,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SecretKind::Slug => "slug secret",
            SecretKind::Admin => "admin secret",
        }
    }
}

/// Both secrets, wiped from memory on drop.
///
/// This is the entry point for applications embedding the library: load
/// once at startup with `Secrets::from_env` and pass `slug_secret()` and
/// `admin_secret()` to the slug and token functions. `slugward config
/// check` loads secrets the same way.
pub struct Secrets {
    slug: Zeroizing<String>,
    admin: Zeroizing<String>,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("slug", &"<redacted>")
            .field("admin", &"<redacted>")
            .finish()
    }
}

impl Secrets {
    /// Build from explicit values, enforcing the same rules as loading.
    pub fn new(slug: impl Into<String>, admin: impl Into<String>) -> Result<Self> {
        let slug = Zeroizing::new(slug.into());
        let admin = Zeroizing::new(admin.into());

        let mut problems = Vec::new();
        check_value("slug secret", Some(slug.as_str()), &mut problems);
        check_value("admin secret", Some(admin.as_str()), &mut problems);
        check_distinct(Some(slug.as_str()), Some(admin.as_str()), &mut problems);
        if !problems.is_empty() {
            return Err(SlugwardError::InvalidSecrets(problems));
        }

        Ok(Self { slug, admin })
    }

    /// Read both secrets from the process environment.
    pub fn from_env(settings: &Settings) -> Result<Self> {
        Self::from_lookup(settings, |name| std::env::var(name).ok())
    }

    /// Read both secrets through `lookup`, reporting every problem at once.
    pub fn from_lookup<F>(settings: &Settings, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slug = lookup(settings.slug_secret_var.as_str()).map(Zeroizing::new);
        let admin = lookup(settings.admin_secret_var.as_str()).map(Zeroizing::new);

        let problems = collect_problems(
            settings,
            slug.as_ref().map(|s| s.as_str()),
            admin.as_ref().map(|s| s.as_str()),
        );
        if !problems.is_empty() {
            debug!(problems = problems.len(), "secrets rejected");
            return Err(SlugwardError::InvalidSecrets(problems));
        }

        match (slug, admin) {
            (Some(slug), Some(admin)) => Ok(Self { slug, admin }),
            // collect_problems reports any missing value.
            _ => Err(SlugwardError::InvalidSecrets(vec![
                "secrets could not be read".into(),
            ])),
        }
    }

    pub fn slug_secret(&self) -> &str {
        &self.slug
    }

    pub fn admin_secret(&self) -> &str {
        &self.admin
    }

    pub fn get(&self, kind: SecretKind) -> &str {
        match kind {
            SecretKind::Slug => self.slug_secret(),
            SecretKind::Admin => self.admin_secret(),
        }
    }
}

/// List every configuration problem with the secrets visible via `lookup`.
///
/// An empty list means the configuration is usable. Messages name the
/// variables but never include their values.
pub fn validate_secrets<F>(settings: &Settings, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    match Secrets::from_lookup(settings, lookup) {
        Ok(_) => Vec::new(),
        Err(SlugwardError::InvalidSecrets(problems)) => problems,
        Err(other) => vec![other.to_string()],
    }
}

/// Problems with a single secret `value` of `kind`.
///
/// `other` is the other secret when it is known, for the distinctness
/// check. Used when a command only needs one of the two secrets.
pub fn check_secret(
    settings: &Settings,
    kind: SecretKind,
    value: &str,
    other: Option<&str>,
) -> Vec<String> {
    let mut problems = Vec::new();
    check_value(kind.var_name(settings), Some(value), &mut problems);
    check_distinct(Some(value), other, &mut problems);
    problems
}

fn collect_problems(settings: &Settings, slug: Option<&str>, admin: Option<&str>) -> Vec<String> {
    let mut problems = Vec::new();
    check_value(&settings.slug_secret_var, slug, &mut problems);
    check_value(&settings.admin_secret_var, admin, &mut problems);
    check_distinct(slug, admin, &mut problems);
    problems
}

fn check_value(name: &str, value: Option<&str>, problems: &mut Vec<String>) {
    match value {
        None => problems.push(format!("{name} is not set")),
        Some("") => problems.push(format!("{name} is empty")),
        Some(v) if v.starts_with(PLACEHOLDER_PREFIX) => {
            problems.push(format!("{name} still holds a placeholder value"))
        }
        Some(_) => {}
    }
}

fn check_distinct(slug: Option<&str>, admin: Option<&str>, problems: &mut Vec<String>) {
    if let (Some(slug), Some(admin)) = (slug, admin) {
        if !slug.is_empty() && slug == admin {
            problems.push("the slug secret must differ from the admin secret".into());
        }
    }
}
