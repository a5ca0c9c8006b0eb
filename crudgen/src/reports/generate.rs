//! Generate command report data structures.

use crudgen_codegen::{GenerateResult, OutcomeStatus, PreviewFile};

use super::output::{Output, Report};

/// Report data from generating one table.
#[derive(Debug)]
pub struct TableReport {
    /// Table name.
    pub table: String,
    /// Number of columns in the looked-up schema.
    pub column_count: usize,
    /// Files written or previewed.
    pub outcome: TableOutcome,
}

/// What generation did for a table.
#[derive(Debug)]
pub enum TableOutcome {
    /// Files were written to disk.
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl TableReport {
    /// Whether every operation succeeded.
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            TableOutcome::Written(result) => result.is_success(),
            TableOutcome::Preview(_) => true,
        }
    }

    fn columns_label(&self) -> String {
        let plural = if self.column_count == 1 { "" } else { "s" };
        format!("{} ({} column{})", self.table, self.column_count, plural)
    }
}

impl Report for TableReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            TableOutcome::Written(result) => self.render_written(out, result),
            TableOutcome::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl TableReport {
    fn render_written(&self, out: &mut dyn Output, result: &GenerateResult) {
        out.title(&self.columns_label());

        for outcome in &result.outcomes {
            let path = outcome.path.display().to_string();
            match &outcome.status {
                OutcomeStatus::Written => out.success_item(&path),
                OutcomeStatus::Failed(reason) => out.failure_item(&path, reason),
            }
        }

        let failed = result.failures().count();
        if failed > 0 {
            out.warning(&format!(
                "{} of {} operations failed for '{}'",
                failed,
                result.outcomes.len(),
                self.table
            ));
        } else {
            out.success(&format!(
                "All CRUD operation files generated for table: {}",
                self.table
            ));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated for {}",
            files.len(),
            self.columns_label()
        ));
    }
}
