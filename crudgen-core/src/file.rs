use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
#[allow(async_fn_in_trait)]
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, creating parent directories as needed.
    /// An existing file is replaced.
    async fn write(&self, base: &Path) -> Result<()> {
        write_file(&self.path(base), &self.render()).await
    }
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(path, content)
        .await
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// A file to be written at a fixed path
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, replacing any existing content
    pub async fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content).await
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("greeting.txt")
        }

        fn render(&self) -> String {
            "hello".to_string()
        }
    }

    #[tokio::test]
    async fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[tokio::test]
    async fn test_file_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crudgen.toml");
        fs::write(&path, "original").unwrap();

        File::new(&path, "replacement").write().await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
    }

    #[tokio::test]
    async fn test_generated_file_write_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let written = temp.path().join("nested").join("greeting.txt");

        Greeting.write(temp.path()).await.unwrap();
        Greeting.write(temp.path()).await.unwrap();

        assert_eq!(fs::read_to_string(written).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_write_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blocker"), "").unwrap();

        let file = File::new(temp.path().join("blocker").join("x.ts"), "content");

        assert!(file.write().await.is_err());
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }
}
