//! `slugward config check` — report every problem with the secrets.

use crate::cli::output::{self, SecretStatus};
use crate::cli::{load_settings, Cli};
use crate::config::{SecretKind, Secrets, Settings};
use crate::errors::{Result, SlugwardError};

/// Execute the `config check` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    output::print_secret_status_table(&status_rows(&settings, |name: &str| {
        std::env::var(name).ok()
    }));

    match Secrets::from_env(&settings) {
        Ok(_) => {
            output::success("Configuration is complete");
            Ok(())
        }
        Err(e @ SlugwardError::InvalidSecrets(_)) => {
            output::tip("Run `slugward gen-secret` to create a fresh value.");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Describe each secret variable without revealing its value.
fn status_rows<F>(settings: &Settings, lookup: F) -> Vec<SecretStatus>
where
    F: Fn(&str) -> Option<String>,
{
    [SecretKind::Slug, SecretKind::Admin]
        .into_iter()
        .map(|kind| {
            let variable = kind.var_name(settings).to_string();
            let state = match lookup(variable.as_str()) {
                None => "missing",
                Some(v) if v.is_empty() => "empty",
                Some(_) => "set",
            };
            SecretStatus {
                label: kind.label(),
                variable,
                state: state.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_report_state_only() {
        let settings = Settings::default();
        let rows = status_rows(&settings, |name: &str| {
            (name == "SLUG_SECRET").then(|| "hidden-value".to_string())
        });

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].variable, "SLUG_SECRET");
        assert_eq!(rows[0].state, "set");
        assert_eq!(rows[1].variable, "ADMIN_PASSWORD");
        assert_eq!(rows[1].state, "missing");
        assert!(rows.iter().all(|r| !r.state.contains("hidden")));
    }
}
