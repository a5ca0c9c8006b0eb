//! Generate operation - schema lookup followed by code generation.

use std::path::Path;

use crudgen_codegen::{LanguageCodegen, OutputLayout};
use crudgen_codegen_typescript::{Generator, GeneratorOptions};
use crudgen_core::{Operation, validate_table_name};
use crudgen_manifest::{DatabaseConfig, Manifest};
use crudgen_schema::{
    Error as SchemaError, LayeredSource, ManifestSource, PostgresSource, SchemaSource,
    require_schema,
};
use miette::Diagnostic;
use thiserror::Error;

use crate::reports::{TableOutcome, TableReport};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Base directory the data directory is created in.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Operations requested on the command line; empty means the manifest's.
    pub only: &'a [Operation],
}

/// Why a table produced no files at all.
#[derive(Debug, Error, Diagnostic)]
pub enum TableError {
    #[error("invalid table name '{table}'")]
    #[diagnostic(
        code(crudgen::invalid_table),
        help("{reason}. Table names must be usable as TypeScript identifiers.")
    )]
    InvalidName { table: String, reason: &'static str },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(SchemaError),
}

/// Build the schema lookup chain: declared tables first, then PostgreSQL
/// when a database is configured or a URL is given.
pub fn schema_source(
    manifest: &Manifest,
    database_url: Option<&str>,
) -> crudgen_schema::Result<LayeredSource> {
    let source = LayeredSource::new().with(ManifestSource::new(manifest));

    let database = match (&manifest.database, database_url) {
        (None, None) => return Ok(source),
        (Some(database), _) => database.clone(),
        (None, Some(_)) => DatabaseConfig::default(),
    };

    let url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var(&database.env).map_err(|_| {
            Box::new(SchemaError::MissingDatabaseUrl {
                env: database.env.clone(),
            })
        })?,
    };

    Ok(source.with(PostgresSource::new(&url, database.schema)?))
}

/// Translate the manifest into generator settings for one table.
pub fn generator_options(manifest: &Manifest, table: &str, only: &[Operation]) -> GeneratorOptions {
    let operations = if only.is_empty() {
        manifest.generate.operations.clone()
    } else {
        only.to_vec()
    };

    GeneratorOptions::default()
        .with_client_import(&manifest.client.import)
        .with_client_factory(&manifest.client.factory)
        .with_key_column(&manifest.generate.key)
        .with_order_by(manifest.order_by(table).map(str::to_string))
        .with_operations(operations)
        .with_layout(OutputLayout::new(&manifest.output.dir))
}

/// Execute the generate operation for one table.
///
/// The schema is looked up once, before anything is written. An unknown
/// table is an error and leaves the file system untouched. Failures of
/// individual operations are recorded in the report and do not stop the
/// remaining operations.
pub async fn generate_table(
    source: &dyn SchemaSource,
    manifest: &Manifest,
    table: &str,
    opts: &GenerateOptions<'_>,
) -> Result<TableReport, TableError> {
    if let Some(reason) = validate_table_name(table) {
        return Err(TableError::InvalidName {
            table: table.to_string(),
            reason,
        });
    }

    let schema = require_schema(source, table)
        .await
        .map_err(|e| TableError::Schema(*e))?;

    let options = generator_options(manifest, table, opts.only);
    let generator = Generator::new(&schema, &options);

    let outcome = if opts.dry_run {
        TableOutcome::Preview(generator.preview())
    } else {
        let result = generator.generate(opts.output_dir).await;
        tracing::info!(
            table,
            written = result.written().count(),
            failed = result.failures().count(),
            "generation finished"
        );
        TableOutcome::Written(result)
    };

    Ok(TableReport {
        table: table.to_string(),
        column_count: schema.len(),
        outcome,
    })
}
