//! Shared code generation utilities for the crudgen scaffolding CLI.
//!
//! This crate provides language-agnostic abstractions used by
//! language-specific generators (e.g., `crudgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - The [`LanguageCodegen`](language::LanguageCodegen) trait and its results
//! - [`paths`] - Output directory layout

pub mod builder;
pub mod language;
pub mod paths;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, OperationOutcome, OutcomeStatus, PreviewFile};
pub use paths::OutputLayout;
