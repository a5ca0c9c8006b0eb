//! TypeScript code generator producing Supabase CRUD functions.

use std::path::Path;

use async_trait::async_trait;
use crudgen_codegen::language::{
    GenerateResult, LanguageCodegen, OperationOutcome, OutcomeStatus, PreviewFile,
};
use crudgen_core::{GeneratedFile, TableSchema};

use crate::{
    GeneratorOptions,
    files::{OperationTs, TableContext},
};

/// TypeScript generator bound to a single table.
pub struct Generator<'a> {
    schema: &'a TableSchema,
    options: &'a GeneratorOptions,
}

#[async_trait]
impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    async fn generate(&self, output_dir: &Path) -> GenerateResult {
        self.generate_files(output_dir).await
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a TableSchema, options: &'a GeneratorOptions) -> Self {
        Self { schema, options }
    }

    fn files(&self) -> impl Iterator<Item = OperationTs<'a>> + '_ {
        let ctx = TableContext::new(self.schema, self.options);
        self.options
            .selected_operations()
            .map(move |op| OperationTs::new(op, ctx))
    }

    /// Preview generated files without writing to disk.
    fn preview_files(&self) -> Vec<PreviewFile> {
        self.files()
            .map(|file| PreviewFile {
                operation: file.operation(),
                path: file.relative_path().display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Write every selected operation. A failure is recorded and the next
    /// operation still runs.
    async fn generate_files(&self, output_dir: &Path) -> GenerateResult {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let operation = file.operation();
            let path = file.path(output_dir);

            let status = match file.write(output_dir).await {
                Ok(()) => {
                    tracing::info!(
                        table = self.schema.table(),
                        %operation,
                        path = %path.display(),
                        "generated"
                    );
                    OutcomeStatus::Written
                }
                Err(err) => {
                    tracing::error!(
                        table = self.schema.table(),
                        %operation,
                        error = %format!("{:#}", err),
                        "failed to generate"
                    );
                    OutcomeStatus::Failed(format!("{:#}", err))
                }
            };

            result.push(OperationOutcome {
                operation,
                path,
                status,
            });
        }

        result
    }
}
