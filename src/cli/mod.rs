//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::{check_secret, SecretKind, Settings};
use crate::errors::{Result, SlugwardError};

/// slugward CLI: public slugs for internal ids and admin tokens.
#[derive(Parser)]
#[command(
    name = "slugward",
    about = "Secret-keyed public slugs and stateless admin tokens",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing .slugward.toml (default: current directory)
    #[arg(long, default_value = ".", global = true)]
    pub config_dir: String,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Print the public slug of an internal id
    Slug {
        /// Internal record id (e.g. a UUID)
        id: String,
    },

    /// Check that a slug belongs to an id
    Verify {
        /// Slug to check
        slug: String,
        /// Internal record id
        id: String,
    },

    /// Find which candidate id a slug belongs to
    Find {
        /// Slug to look up
        slug: String,
        /// File with one candidate id per line (reads stdin if omitted)
        #[arg(short, long)]
        candidates: Option<String>,
    },

    /// Check a slug's format (no secret needed)
    Check {
        /// String to check
        slug: String,
    },

    /// Add a `slug` field to every record of a JSON array
    Attach {
        /// JSON file holding an array of records
        file: String,
        /// Field holding the internal id (default: from config, else "id")
        #[arg(long)]
        id_field: Option<String>,
        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Issue or verify admin tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a random secret suitable for either secret variable
    GenSecret {
        /// Number of random bytes (encoded as URL-safe base64)
        #[arg(long, default_value = "32")]
        bytes: usize,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Token subcommands.
#[derive(clap::Subcommand)]
pub enum TokenAction {
    /// Issue a token valid for the configured maximum age
    Issue,

    /// Verify a token (exit code 1 if invalid or expired)
    Verify {
        /// Token of the form <timestamp>.<signature>
        token: String,
    },
}

/// Config subcommands.
#[derive(clap::Subcommand)]
pub enum ConfigAction {
    /// Report every problem with the configured secrets
    Check,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.slugward.toml` from the configured directory.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(Path::new(&cli.config_dir))
}

/// Get one of the secrets, trying in order:
/// 1. The environment variable named in the settings
/// 2. Interactive prompt
///
/// The value is rejected if it is a placeholder or equals the other
/// secret's variable. Returns `Zeroizing<String>` so the secret is wiped
/// from memory on drop.
pub fn resolve_secret(settings: &Settings, kind: SecretKind) -> Result<Zeroizing<String>> {
    let var = kind.var_name(settings);

    let secret = match std::env::var(var) {
        Ok(value) if !value.is_empty() => Zeroizing::new(value),
        _ => prompt_secret(kind, var)?,
    };

    let other = std::env::var(kind.other().var_name(settings))
        .ok()
        .map(Zeroizing::new);
    let problems = check_secret(settings, kind, &secret, other.as_ref().map(|o| o.as_str()));
    if !problems.is_empty() {
        return Err(SlugwardError::InvalidSecrets(problems));
    }

    Ok(secret)
}

fn prompt_secret(kind: SecretKind, var: &str) -> Result<Zeroizing<String>> {
    let value = dialoguer::Password::new()
        .with_prompt(format!("Enter {} ({var} is not set)", kind.label()))
        .interact()
        .map_err(|e| SlugwardError::CommandFailed(format!("secret prompt: {e}")))?;

    if value.is_empty() {
        return Err(SlugwardError::SecretMissing(var.to_string()));
    }
    Ok(Zeroizing::new(value))
}

/// Read candidate ids, one per line, from a file or stdin.
///
/// Lines are trimmed; blank lines are skipped.
pub fn read_candidates(path: Option<&str>) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| {
                SlugwardError::CommandFailed(format!("cannot open candidates file '{path}': {e}"))
            })?;
            parse_candidates(BufReader::new(file))
        }
        None => parse_candidates(io::stdin().lock()),
    }
}

/// Collect non-blank, trimmed lines.
pub fn parse_candidates(reader: impl BufRead) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let id = line.trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}
