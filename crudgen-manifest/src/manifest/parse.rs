//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{CONFIG_FILE_NAME, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, CONFIG_FILE_NAME)
    }
}

impl Manifest {
    /// Parse a crudgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a crudgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.require_non_empty(&manifest.output.dir, "output.dir")?;
    ctx.require_non_empty(&manifest.client.import, "client.import")?;
    ctx.validate_name(&manifest.client.factory, "client factory")?;
    ctx.require_non_empty(&manifest.generate.key, "generate.key")?;

    if manifest.generate.operations.is_empty() {
        return Err(ctx.source_context().validation_error_at(
            "generate.operations must list at least one operation",
            ctx.find_key_span("operations"),
        ));
    }

    if let Some(database) = &manifest.database {
        ctx.require_non_empty(&database.env, "database.env")?;
        ctx.require_non_empty(&database.schema, "database.schema")?;
    }

    for (name, table) in &manifest.tables {
        ctx.validate_name(name, "table")?;

        let table_ctx = ctx.push("tables").push(name);
        for (column, ty) in &table.columns {
            if ty.trim().is_empty() {
                return Err(table_ctx.source_context().validation_error_at(
                    format!(
                        "column '{}' in '{}' has an empty type",
                        column,
                        table_ctx.path_string()
                    ),
                    table_ctx.find_key_span(column),
                ));
            }
        }

        let undeclared_order = table
            .order_by
            .as_ref()
            .filter(|column| !table.columns.is_empty() && !table.columns.contains_key(*column));
        if let Some(order_by) = undeclared_order {
            return Err(table_ctx.source_context().validation_error_at(
                format!(
                    "order_by column '{}' is not declared in '{}.columns'",
                    order_by,
                    table_ctx.path_string()
                ),
                table_ctx.find_key_span("order_by"),
            ));
        }
    }

    Ok(())
}
