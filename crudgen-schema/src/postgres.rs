use async_trait::async_trait;
use crudgen_core::TableSchema;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{ColumnInfo, Error, Result, SchemaSource, TypeMapper, TypeScriptTypeMapper};

const COLUMNS_QUERY: &str = r#"
SELECT column_name::text, data_type::text, udt_name::text, is_nullable::text
FROM information_schema.columns
WHERE table_schema = $1 AND table_name = $2
ORDER BY ordinal_position
"#;

/// Reads column types from a live PostgreSQL database.
///
/// The connection is opened on the first lookup, so tables answered by an
/// earlier source never touch the database.
pub struct PostgresSource {
    pool: PgPool,
    schema: String,
}

impl PostgresSource {
    /// Prepare a source for `url`, looking tables up in `schema`.
    pub fn new(url: &str, schema: impl Into<String>) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy(url)
            .map_err(|source| Box::new(Error::InvalidDatabaseUrl { source }))?;
        Ok(Self {
            pool,
            schema: schema.into(),
        })
    }

    async fn columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let rows: Vec<(String, String, String, String)> = sqlx::query_as(COLUMNS_QUERY)
            .bind(&self.schema)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| {
                Box::new(Error::Database {
                    table: table.to_string(),
                    source,
                })
            })?;

        Ok(rows
            .into_iter()
            .map(|(name, data_type, udt_name, is_nullable)| {
                ColumnInfo::new(name, data_type, udt_name, is_nullable == "YES")
            })
            .collect())
    }
}

#[async_trait]
impl SchemaSource for PostgresSource {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn table_schema(&self, table: &str) -> Result<Option<TableSchema>> {
        tracing::debug!(table, schema = %self.schema, "introspecting table");
        let columns = self.columns(table).await?;
        if columns.is_empty() {
            return Ok(None);
        }

        let mapper = TypeScriptTypeMapper;
        let schema = TableSchema::from_columns(
            table,
            columns
                .iter()
                .map(|column| (column.name.clone(), mapper.map_column(column))),
        );
        Ok(Some(schema))
    }
}
