//! TypeScript file generators, one per operation.

mod create_ts;
mod delete_ts;
mod list_ts;
mod read_ts;
mod update_ts;

use std::path::{Path, PathBuf};

use crudgen_core::{GeneratedFile, Operation, TableSchema, capitalize_first, strip_nullable};

pub use create_ts::CreateTs;
pub use delete_ts::DeleteTs;
pub use list_ts::ListTs;
pub use read_ts::ReadTs;
pub use update_ts::UpdateTs;

use crate::{
    GeneratorOptions,
    ast::{Import, MethodChain, string_literal},
    code_file::CodeFile,
};

/// Extension of every generated file.
pub const FILE_EXTENSION: &str = "ts";

/// Comment placed under the client import.
pub const IMPORT_NOTE: &str = "Default location of the Supabase client in Next.js projects. Adjust this import if your framework keeps it elsewhere.";

/// Everything an operation template needs to know about its table.
#[derive(Clone, Copy)]
pub struct TableContext<'a> {
    pub schema: &'a TableSchema,
    pub options: &'a GeneratorOptions,
}

impl<'a> TableContext<'a> {
    pub fn new(schema: &'a TableSchema, options: &'a GeneratorOptions) -> Self {
        Self { schema, options }
    }

    pub fn table(&self) -> &str {
        self.schema.table()
    }

    /// Table name with its first character upper-cased, used in identifiers.
    pub fn type_name(&self) -> String {
        capitalize_first(self.table())
    }

    /// `"users"`
    pub fn table_literal(&self) -> String {
        string_literal(self.table())
    }

    pub fn key_column(&self) -> &str {
        &self.options.key_column
    }

    pub fn key_literal(&self) -> String {
        string_literal(self.key_column())
    }

    /// TypeScript type of the key column, `string` when the schema does not
    /// list it.
    pub fn key_type(&self) -> &str {
        self.schema
            .column_type(self.key_column())
            .map(strip_nullable)
            .unwrap_or("string")
    }

    /// Imports and the note that open every file.
    pub fn file(&self) -> CodeFile {
        CodeFile::new()
            .import(Import::new(&self.options.client_import).named(&self.options.client_factory))
            .import_note(IMPORT_NOTE)
    }

    /// `const supabase = await createClient();`
    pub fn client_line(&self) -> String {
        format!("const supabase = await {}();", self.options.client_factory)
    }

    /// `supabase.from("users")` as the start of a query chain.
    pub fn query(&self) -> MethodChain {
        MethodChain::on("supabase").call("from", self.table_literal())
    }
}

/// The file for one operation on one table.
pub enum OperationTs<'a> {
    Create(CreateTs<'a>),
    Read(ReadTs<'a>),
    Update(UpdateTs<'a>),
    Delete(DeleteTs<'a>),
    List(ListTs<'a>),
}

impl<'a> OperationTs<'a> {
    pub fn new(operation: Operation, ctx: TableContext<'a>) -> Self {
        match operation {
            Operation::Create => Self::Create(CreateTs::new(ctx)),
            Operation::Read => Self::Read(ReadTs::new(ctx)),
            Operation::Update => Self::Update(UpdateTs::new(ctx)),
            Operation::Delete => Self::Delete(DeleteTs::new(ctx)),
            Operation::List => Self::List(ListTs::new(ctx)),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Create(_) => Operation::Create,
            Self::Read(_) => Operation::Read,
            Self::Update(_) => Operation::Update,
            Self::Delete(_) => Operation::Delete,
            Self::List(_) => Operation::List,
        }
    }

    fn ctx(&self) -> &TableContext<'a> {
        match self {
            Self::Create(f) => &f.ctx,
            Self::Read(f) => &f.ctx,
            Self::Update(f) => &f.ctx,
            Self::Delete(f) => &f.ctx,
            Self::List(f) => &f.ctx,
        }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        let ctx = self.ctx();
        ctx.options
            .layout
            .relative_path(ctx.table(), self.operation(), FILE_EXTENSION)
    }
}

impl GeneratedFile for OperationTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        match self {
            Self::Create(f) => f.render(),
            Self::Read(f) => f.render(),
            Self::Update(f) => f.render(),
            Self::Delete(f) => f.render(),
            Self::List(f) => f.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> TableSchema {
        TableSchema::new("users")
            .column("id", "number | null")
            .column("email", "string")
    }

    #[test]
    fn test_key_type_comes_from_schema() {
        let schema = schema();
        let options = GeneratorOptions::default();
        let ctx = TableContext::new(&schema, &options);
        assert_eq!(ctx.key_type(), "number");
    }

    #[test]
    fn test_key_type_defaults_to_string() {
        let schema = TableSchema::new("users").column("email", "string");
        let options = GeneratorOptions::default();
        let ctx = TableContext::new(&schema, &options);
        assert_eq!(ctx.key_type(), "string");
    }

    #[test]
    fn test_relative_path_per_operation() {
        let schema = schema();
        let options = GeneratorOptions::default();
        let ctx = TableContext::new(&schema, &options);
        for op in Operation::ALL {
            let file = OperationTs::new(op, ctx);
            assert_eq!(file.operation(), op);
            assert_eq!(
                file.relative_path(),
                Path::new("data").join("users").join(format!("{}.ts", op))
            );
        }
    }

    #[test]
    fn test_custom_client_import() {
        let schema = schema();
        let options = GeneratorOptions::default()
            .with_client_import("~/lib/db")
            .with_client_factory("getClient");
        let ctx = TableContext::new(&schema, &options);
        let out = OperationTs::new(Operation::Read, ctx).render();
        assert!(out.starts_with("import { getClient } from \"~/lib/db\";\n"));
        assert!(out.contains("const supabase = await getClient();"));
    }
}
