//! Settings that shape the generated TypeScript.

use crudgen_codegen::OutputLayout;
use crudgen_core::Operation;

/// Module the Supabase client factory is imported from by default
/// (the Next.js App Router convention).
pub const DEFAULT_CLIENT_IMPORT: &str = "@/utils/supabase/server";

/// Name of the async function that returns a Supabase client.
pub const DEFAULT_CLIENT_FACTORY: &str = "createClient";

/// Column used to address a single row.
pub const DEFAULT_KEY_COLUMN: &str = "id";

/// Options for the TypeScript generator.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub client_import: String,
    pub client_factory: String,
    pub key_column: String,
    /// Column the list operation orders by; `None` falls back to `date`
    /// when the table has one.
    pub order_by: Option<String>,
    pub operations: Vec<Operation>,
    pub layout: OutputLayout,
}

impl GeneratorOptions {
    pub fn with_client_import(mut self, import: impl Into<String>) -> Self {
        self.client_import = import.into();
        self
    }

    pub fn with_client_factory(mut self, factory: impl Into<String>) -> Self {
        self.client_factory = factory.into();
        self
    }

    pub fn with_key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = column.into();
        self
    }

    pub fn with_order_by(mut self, column: Option<String>) -> Self {
        self.order_by = column;
        self
    }

    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations = operations.into_iter().collect();
        self
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Selected operations in generation order, without duplicates.
    pub fn selected_operations(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(|op| self.operations.contains(op))
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            client_import: DEFAULT_CLIENT_IMPORT.to_string(),
            client_factory: DEFAULT_CLIENT_FACTORY.to_string(),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            order_by: None,
            operations: Operation::ALL.to_vec(),
            layout: OutputLayout::default(),
        }
    }
}
