//! Check operation - manifest validation summary.

use std::path::Path;

use crudgen_manifest::Manifest;

use crate::reports::{CheckReport, DatabaseSummary, TableSummary};

/// Execute the check operation.
///
/// Parsing already validated the manifest; this summarizes what it configures.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let database = manifest.database.as_ref().map(|db| DatabaseSummary {
        env: db.env.clone(),
        schema: db.schema.clone(),
        env_set: std::env::var_os(&db.env).is_some(),
    });

    let tables = manifest
        .tables
        .iter()
        .map(|(name, table)| TableSummary {
            name: name.clone(),
            columns: table.columns.len(),
            order_by: table.order_by.clone(),
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        output_dir: manifest.output.dir.clone(),
        client_import: manifest.client.import.clone(),
        client_factory: manifest.client.factory.clone(),
        key: manifest.generate.key.clone(),
        operations: manifest
            .generate
            .operations
            .iter()
            .map(|op| op.to_string())
            .collect(),
        database,
        tables,
    }
}
