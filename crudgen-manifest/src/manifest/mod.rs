//! Manifest types and parsing for crudgen.toml files.

mod file;
mod parse;
mod template;
mod validate;

use crudgen_core::{Operation, TableSchema};
use indexmap::IndexMap;
use serde::Deserialize;

pub use file::ConfigFile;
pub use template::STARTER_TEMPLATE;
pub use validate::ParseContext;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "crudgen.toml";

/// Root manifest for crudgen.toml
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where generated files go
    #[serde(default)]
    pub output: OutputConfig,

    /// Supabase client import
    #[serde(default)]
    pub client: ClientConfig,

    /// Live schema introspection (omit to rely on declared tables only)
    pub database: Option<DatabaseConfig>,

    /// What to generate
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Declared table schemas, in file order
    #[serde(default)]
    pub tables: IndexMap<String, TableConfig>,
}

impl Manifest {
    /// Get the declared configuration for a table.
    pub fn table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.get(name)
    }

    /// Declared schema for a table, if its columns are listed.
    pub fn table_schema(&self, name: &str) -> Option<TableSchema> {
        self.table(name)
            .filter(|table| !table.columns.is_empty())
            .map(|table| {
                TableSchema::from_columns(
                    name,
                    table
                        .columns
                        .iter()
                        .map(|(column, ty)| (column.clone(), ty.clone())),
                )
            })
    }

    /// Order column configured for a table.
    pub fn order_by(&self, name: &str) -> Option<&str> {
        self.table(name).and_then(|table| table.order_by.as_deref())
    }
}

/// `[output]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory holding one subdirectory per table
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "data".to_string()
}

/// `[client]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Module the client factory is imported from
    #[serde(default = "default_client_import")]
    pub import: String,
    /// Exported async function returning a client
    #[serde(default = "default_client_factory")]
    pub factory: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            import: default_client_import(),
            factory: default_client_factory(),
        }
    }
}

fn default_client_import() -> String {
    "@/utils/supabase/server".to_string()
}

fn default_client_factory() -> String {
    "createClient".to_string()
}

/// `[database]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Environment variable holding the connection string
    #[serde(default = "default_database_env")]
    pub env: String,
    /// PostgreSQL schema the tables live in
    #[serde(default = "default_database_schema")]
    pub schema: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            env: default_database_env(),
            schema: default_database_schema(),
        }
    }
}

fn default_database_env() -> String {
    "DATABASE_URL".to_string()
}

fn default_database_schema() -> String {
    "public".to_string()
}

/// `[generate]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Column addressing a single row
    #[serde(default = "default_key")]
    pub key: String,
    /// Operations to generate
    #[serde(default = "default_operations")]
    pub operations: Vec<Operation>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            operations: default_operations(),
        }
    }
}

fn default_key() -> String {
    "id".to_string()
}

fn default_operations() -> Vec<Operation> {
    Operation::ALL.to_vec()
}

/// `[tables.<name>]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Column the list operation orders by
    pub order_by: Option<String>,
    /// Column name to TypeScript type, in declaration order
    #[serde(default)]
    pub columns: IndexMap<String, String>,
}
