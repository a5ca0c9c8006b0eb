//! Output layout for generated files.
//!
//! Files land in `<base>/<data dir>/<table>/<operation>.<ext>`.

use std::path::PathBuf;

use crudgen_core::Operation;

/// Default directory, relative to the base, that holds per-table folders.
pub const DATA_DIR: &str = "data";

/// Where generated files are placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    data_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path relative to the base for one operation file.
    pub fn relative_path(&self, table: &str, operation: Operation, extension: &str) -> PathBuf {
        self.data_dir
            .join(table)
            .join(format!("{}.{}", operation.as_str(), extension))
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DATA_DIR)
    }
}
