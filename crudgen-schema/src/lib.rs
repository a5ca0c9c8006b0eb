//! Table schema lookup for crudgen.
//!
//! A [`SchemaSource`] answers one question: which columns does a table have,
//! and what TypeScript type does each one map to. Sources can be stacked with
//! [`LayeredSource`] so tables declared in `crudgen.toml` take precedence over
//! a live database.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod layered;
mod manifest;
mod postgres;
mod source;
mod type_mapper;

pub use error::{Error, Result};
pub use layered::LayeredSource;
pub use manifest::ManifestSource;
pub use postgres::PostgresSource;
pub use source::{SchemaSource, require_schema};
pub use type_mapper::{ColumnInfo, TypeMapper, TypeScriptTypeMapper};
