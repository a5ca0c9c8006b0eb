use async_trait::async_trait;
use crudgen_core::TableSchema;

use crate::{Error, Result};

/// Something that can describe the columns of a table.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Short name used in logs (e.g., "postgres").
    fn name(&self) -> &'static str;

    /// Look up a table.
    ///
    /// Returns `Ok(None)` when this source does not know the table.
    async fn table_schema(&self, table: &str) -> Result<Option<TableSchema>>;
}

/// Look up a table and treat an unknown table as an error.
pub async fn require_schema(source: &dyn SchemaSource, table: &str) -> Result<TableSchema> {
    match source.table_schema(table).await? {
        Some(schema) => {
            tracing::debug!(
                table,
                source = source.name(),
                columns = schema.len(),
                "schema found"
            );
            Ok(schema)
        }
        None => Err(Error::not_found(table)),
    }
}
