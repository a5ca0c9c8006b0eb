//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`GenerateResult`] - Per-operation outcome of a generation run
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, OperationOutcome, OutcomeStatus, PreviewFile};
