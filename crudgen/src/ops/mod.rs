//! Core operations.
//!
//! This module contains the business logic for crudgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

use crudgen_manifest::{CONFIG_FILE_NAME, ConfigFile, Manifest};

pub use check::check;
pub use generate::{GenerateOptions, TableError, generate_table, schema_source};

/// Load the manifest.
///
/// An explicit path must exist. Without one, `crudgen.toml` in the working
/// directory is used when present and the defaults otherwise.
pub fn load_manifest(config: Option<&Path>) -> crudgen_manifest::Result<Manifest> {
    match config {
        Some(path) => ConfigFile::open(path).map(ConfigFile::into_manifest),
        None if Path::new(CONFIG_FILE_NAME).is_file() => {
            ConfigFile::open(CONFIG_FILE_NAME).map(ConfigFile::into_manifest)
        }
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Manifest::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_explicit_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[generate]\nkey = \"uuid\"\n").unwrap();

        let manifest = load_manifest(Some(&path)).unwrap();
        assert_eq!(manifest.generate.key, "uuid");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        assert!(load_manifest(Some(&path)).is_err());
    }
}
