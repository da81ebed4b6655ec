//! `slugward attach` — add a `slug` field to every record of a JSON array.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::cli::output;
use crate::cli::{load_settings, resolve_secret, Cli};
use crate::config::SecretKind;
use crate::errors::{Result, SlugwardError};
use crate::slug::attach_slugs_json;

/// Execute the `attach` command.
pub fn execute(
    cli: &Cli,
    file: &str,
    id_field: Option<&str>,
    output_path: Option<&str>,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let id_field = id_field.unwrap_or(&settings.id_field);

    let records = read_records(Path::new(file))?;
    let secret = resolve_secret(&settings, SecretKind::Slug)?;
    let count = records.len();
    let decorated = attach_slugs_json(records, id_field, &secret)?;

    let content = serde_json::to_string_pretty(&decorated)
        .map_err(|e| SlugwardError::SerializationError(format!("JSON output: {e}")))?;

    match output_path {
        Some(dest) => {
            fs::write(dest, format!("{content}\n"))?;
            output::success(&format!("Wrote {count} record(s) to {dest}"));
        }
        None => println!("{content}"),
    }

    Ok(())
}

/// Parse `path` as a JSON array of records.
fn read_records(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SlugwardError::CommandFailed(format!("cannot read {}: {e}", path.display()))
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| {
        SlugwardError::SerializationError(format!("invalid JSON in {}: {e}", path.display()))
    })?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(SlugwardError::NotARecordArray(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_record_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("records.json");
        fs::write(&path, r#"[{"id":"a"},{"id":"b"}]"#).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn rejects_non_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("records.json");
        fs::write(&path, r#"{"id":"a"}"#).unwrap();

        assert!(matches!(
            read_records(&path),
            Err(SlugwardError::NotARecordArray(_))
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("records.json");
        fs::write(&path, "[{").unwrap();

        assert!(matches!(
            read_records(&path),
            Err(SlugwardError::SerializationError(_))
        ));
    }
}
