//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with
//! organized imports and body content.

use crudgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Organizes code into an import section (optionally followed by comment
/// lines that belong to it) and body elements separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("@/utils/supabase/server").named("createClient"))
///     .add(props_interface)
///     .add(create_fn)
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    import_notes: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a `//` comment rendered directly below the imports.
    pub fn import_note(mut self, text: impl Into<String>) -> Self {
        self.import_notes.push(text.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            builder.emit(import);
        }
        for note in &self.import_notes {
            builder.push_line(&format!("// {}", note));
        }

        let has_header = !self.imports.is_empty() || !self.import_notes.is_empty();
        if has_header && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Fn, Interface};

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_imports_only() {
        let file = CodeFile::new().import(Import::new("@/db").named("createClient"));
        assert_eq!(file.render(), "import { createClient } from \"@/db\";\n");
    }

    #[test]
    fn test_import_note_follows_imports() {
        let file = CodeFile::new()
            .import(Import::new("@/db").named("createClient"))
            .import_note("adjust this path")
            .add(Fn::new("getUsers").body_line("return 1;"));
        assert_eq!(
            file.render(),
            "import { createClient } from \"@/db\";\n// adjust this path\n\nexport function getUsers() {\n  return 1;\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_between_body() {
        let file = CodeFile::new()
            .add(Interface::new("Props").field("id", "string"))
            .add(Fn::new("run"));

        assert_eq!(
            file.render(),
            "interface Props {\n  id: string;\n}\n\nexport function run() {\n}\n"
        );
    }
}
