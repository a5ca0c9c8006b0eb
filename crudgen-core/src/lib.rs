//! Core utilities and types for the crudgen scaffolding CLI.
//!
//! This crate provides the table schema model, the operation kinds and the
//! file writing primitives shared across the crudgen crates.

mod file;
mod ident;
mod operation;
mod schema;
mod utils;

// File operations
pub use file::{File, GeneratedFile};
// Identifier checks
pub use ident::{is_reserved_word, validate_table_name};
// Fundamental types
pub use operation::Operation;
pub use schema::TableSchema;
// String utilities
pub use utils::{capitalize_first, strip_nullable};
