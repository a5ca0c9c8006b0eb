use async_trait::async_trait;
use crudgen_core::TableSchema;
use crudgen_manifest::Manifest;
use indexmap::IndexMap;

use crate::{Result, SchemaSource};

/// Tables declared under `[tables.<name>.columns]` in crudgen.toml.
#[derive(Debug, Default)]
pub struct ManifestSource {
    tables: IndexMap<String, TableSchema>,
}

impl ManifestSource {
    pub fn new(manifest: &Manifest) -> Self {
        let tables = manifest
            .tables
            .keys()
            .filter_map(|name| {
                manifest
                    .table_schema(name)
                    .map(|schema| (name.clone(), schema))
            })
            .collect();
        Self { tables }
    }
}

#[async_trait]
impl SchemaSource for ManifestSource {
    fn name(&self) -> &'static str {
        "manifest"
    }

    async fn table_schema(&self, table: &str) -> Result<Option<TableSchema>> {
        Ok(self.tables.get(table).cloned())
    }
}
