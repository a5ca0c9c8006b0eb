//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Directory holding per-table folders.
    pub output_dir: String,
    /// Client import module.
    pub client_import: String,
    /// Client factory function.
    pub client_factory: String,
    /// Key column.
    pub key: String,
    /// Operations that will be generated.
    pub operations: Vec<String>,
    /// Live database settings, when configured.
    pub database: Option<DatabaseSummary>,
    /// Declared tables.
    pub tables: Vec<TableSummary>,
}

#[derive(Debug)]
pub struct DatabaseSummary {
    pub env: String,
    pub schema: String,
    /// Whether the environment variable is currently set.
    pub env_set: bool,
}

#[derive(Debug)]
pub struct TableSummary {
    pub name: String,
    pub columns: usize,
    pub order_by: Option<String>,
}

impl TableSummary {
    fn describe(&self) -> String {
        let columns = match self.columns {
            0 => "columns from database".to_string(),
            1 => "1 column".to_string(),
            n => format!("{} columns", n),
        };
        match &self.order_by {
            Some(column) => format!("{} ({}, ordered by {})", self.name, columns, column),
            None => format!("{} ({})", self.name, columns),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("{} is valid", self.config_path.display()));
        out.newline();

        out.key_value("Output", &self.output_dir);
        out.key_value(
            "Client",
            &format!("{} from \"{}\"", self.client_factory, self.client_import),
        );
        out.key_value("Key column", &self.key);
        out.key_value("Operations", &self.operations.join(", "));

        match &self.database {
            Some(db) => {
                out.key_value(
                    "Database",
                    &format!("${} (schema {})", db.env, db.schema),
                );
                if !db.env_set {
                    out.warning(&format!("{} is not set", db.env));
                }
            }
            None => out.key_value("Database", "not configured"),
        }

        if !self.tables.is_empty() {
            out.newline();
            out.section(&format!("Tables ({})", self.tables.len()));
            for table in &self.tables {
                out.list_item(&table.describe());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report() -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("crudgen.toml"),
            output_dir: "data".to_string(),
            client_import: "@/utils/supabase/server".to_string(),
            client_factory: "createClient".to_string(),
            key: "id".to_string(),
            operations: vec!["create".to_string(), "list".to_string()],
            database: None,
            tables: vec![
                TableSummary {
                    name: "users".to_string(),
                    columns: 3,
                    order_by: Some("created_at".to_string()),
                },
                TableSummary {
                    name: "events".to_string(),
                    columns: 0,
                    order_by: None,
                },
            ],
        }
    }

    #[test]
    fn test_render_summary() {
        let mut out = BufferOutput::default();
        report().render(&mut out);

        let text = out.text();
        assert!(text.starts_with("✓ crudgen.toml is valid"));
        assert!(text.contains("  Client: createClient from \"@/utils/supabase/server\""));
        assert!(text.contains("  Operations: create, list"));
        assert!(text.contains("  Database: not configured"));
        assert!(text.contains("Tables (2):"));
        assert!(text.contains("  - users (3 columns, ordered by created_at)"));
        assert!(text.contains("  - events (columns from database)"));
    }

    #[test]
    fn test_warns_when_database_env_missing() {
        let mut report = report();
        report.database = Some(DatabaseSummary {
            env: "DATABASE_URL".to_string(),
            schema: "public".to_string(),
            env_set: false,
        });
        let mut out = BufferOutput::default();
        report.render(&mut out);

        let text = out.text();
        assert!(text.contains("  Database: $DATABASE_URL (schema public)"));
        assert!(text.contains("warning: DATABASE_URL is not set"));
    }
}
