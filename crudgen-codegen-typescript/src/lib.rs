//! TypeScript code generator for crudgen.
//!
//! Given a table schema, this crate renders one TypeScript module per CRUD
//! operation. Every module imports the Supabase client factory and exports
//! an async function wrapping a single query.
//!
//! # Usage
//!
//! ```ignore
//! use crudgen_codegen_typescript::{Generator, GeneratorOptions, LanguageCodegen};
//! use crudgen_core::TableSchema;
//! use std::path::Path;
//!
//! let schema = TableSchema::new("users").column("id", "string");
//! let options = GeneratorOptions::default();
//! let generator = Generator::new(&schema, &options);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new(".")).await;
//! ```
//!
//! # Generated Output
//!
//! - `data/<table>/create.ts` - insert a row
//! - `data/<table>/read.ts` - select all rows or one by key
//! - `data/<table>/update.ts` - patch a row by key
//! - `data/<table>/delete.ts` - remove a row by key
//! - `data/<table>/list.ts` - default-exported fetch of every row

mod code_file;
mod generator;
mod options;

pub mod ast;
pub mod files;

pub use ast::{Fn, Import, Interface, MethodChain, Param};
pub use code_file::CodeFile;
pub use crudgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use options::{
    DEFAULT_CLIENT_FACTORY, DEFAULT_CLIENT_IMPORT, DEFAULT_KEY_COLUMN, GeneratorOptions,
};
