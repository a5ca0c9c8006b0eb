use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A crudgen.toml file on disk together with its parsed manifest.
pub struct ConfigFile {
    path: PathBuf,
    manifest: Manifest,
}

impl ConfigFile {
    /// Open and parse a crudgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Consume the file and keep only the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}
