//! TypeScript import builder.

use crudgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::string_literal;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn statement(&self) -> String {
        let from = string_literal(&self.from);
        if self.named.is_empty() {
            format!("import {};", from)
        } else {
            format!("import {{ {} }} from {};", self.named.join(", "), from)
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("@/utils/supabase/server")
            .named("createClient")
            .build();
        assert_eq!(
            i,
            "import { createClient } from \"@/utils/supabase/server\";\n"
        );
    }

    #[test]
    fn test_several_named_imports() {
        let i = Import::new("~/lib/db")
            .named("createClient")
            .named("getSession")
            .build();
        assert_eq!(i, "import { createClient, getSession } from \"~/lib/db\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";\n");
    }
}
