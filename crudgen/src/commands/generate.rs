use std::path::PathBuf;

use clap::Args;
use crudgen_core::Operation;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Tables to generate files for
    #[arg(required = true, value_name = "TABLE")]
    pub tables: Vec<String>,

    /// Path to crudgen.toml (defaults to ./crudgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base directory for generated files (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Generate only these operations (e.g. --only create,list)
    #[arg(long, value_delimiter = ',', value_name = "OP")]
    pub only: Vec<Operation>,

    /// PostgreSQL connection string (overrides the configured env var)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let manifest = ops::load_manifest(self.config.as_deref()).unwrap_or_exit();
        let source = ops::schema_source(&manifest, self.database_url.as_deref()).unwrap_or_exit();

        let opts = GenerateOptions {
            output_dir: &self.output,
            dry_run: self.dry_run,
            only: &self.only,
        };

        let mut out = TerminalOutput::new();
        let mut failed = false;

        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            match ops::generate_table(&source, &manifest, table, &opts).await {
                Ok(report) => {
                    report.render(&mut out);
                    failed |= !report.is_success();
                }
                Err(err) => {
                    tracing::error!(table = %table, error = %err, "table skipped");
                    eprintln!("{:?}", miette::Report::new(err));
                    failed = true;
                }
            }
        }

        if failed {
            std::process::exit(1);
        }

        Ok(())
    }
}
