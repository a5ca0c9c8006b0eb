//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use crudgen_core::Operation;

/// Trait for language-specific code generators.
///
/// A generator is bound to one table schema and emits one file per
/// operation.
#[async_trait]
pub trait LanguageCodegen: Send + Sync {
    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate every operation file under `output_dir`.
    ///
    /// Operations run in order. A failing operation is recorded in the
    /// result and does not stop the remaining ones.
    async fn generate(&self, output_dir: &Path) -> GenerateResult;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// One entry per attempted operation, in generation order
    pub outcomes: Vec<OperationOutcome>,
}

impl GenerateResult {
    /// Record an outcome.
    pub fn push(&mut self, outcome: OperationOutcome) {
        self.outcomes.push(outcome);
    }

    /// True when no operation failed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| !o.is_failure())
    }

    /// Outcomes of failed operations.
    pub fn failures(&self) -> impl Iterator<Item = &OperationOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// Paths that were written.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Written))
            .map(|o| o.path.as_path())
    }
}

/// Outcome of a single operation.
#[derive(Debug)]
pub struct OperationOutcome {
    pub operation: Operation,
    /// Target file path
    pub path: PathBuf,
    pub status: OutcomeStatus,
}

impl OperationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed(_))
    }
}

/// What happened to an operation's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Written,
    /// Generation or write failed; holds the error message
    Failed(String),
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    pub operation: Operation,
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}
