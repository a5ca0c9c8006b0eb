//! TypeScript function builder.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// How a function is exported from its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Export {
    Named,
    Default,
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    export: Export,
    is_async: bool,
    params: Vec<Param>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            export: Export::Named,
            is_async: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Export as the module's default (`export default function`).
    pub fn default_export(mut self) -> Self {
        self.export = Export::Default;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a blank line to the function body.
    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    /// Add a nested block (e.g., an `if`) to the function body.
    pub fn body_block(
        mut self,
        header: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.body.push(CodeFragment::block(
            header,
            lines.into_iter().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));
        self
    }

    /// Add a pre-built fragment to the function body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let export = match self.export {
            Export::Named => "export ",
            Export::Default => "export default ",
        };
        let async_kw = if self.is_async { "async " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(|p| {
                let optional = if p.optional { "?" } else { "" };
                format!("{}{}: {}", p.name, optional, p.ty)
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}{}function {}({}) {{",
            export, async_kw, self.name, params_str
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.format_signature(),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("greet").build();
        assert_eq!(f, "export function greet() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("add")
            .param(Param::new("a", "number"))
            .param(Param::new("b", "number"))
            .body_line("return a + b;")
            .build();
        assert!(f.contains("export function add(a: number, b: number) {"));
        assert!(f.contains("  return a + b;"));
    }

    #[test]
    fn test_async_fn() {
        let f = Fn::new("fetch").async_().build();
        assert!(f.contains("export async function fetch() {"));
    }

    #[test]
    fn test_default_export_fn() {
        let f = Fn::new("getUsers").default_export().async_().build();
        assert!(f.starts_with("export default async function getUsers() {"));
    }

    #[test]
    fn test_fn_with_optional_param() {
        let f = Fn::new("readUsers")
            .param(Param::new("id", "string").optional())
            .build();
        assert!(f.contains("export function readUsers(id?: string) {"));
    }

    #[test]
    fn test_body_block_and_blank() {
        let f = Fn::new("check")
            .body_line("const ok = true;")
            .body_blank()
            .body_block("if (!ok) {", ["throw new Error(\"nope\");"])
            .build();
        assert_eq!(
            f,
            "export function check() {\n  const ok = true;\n\n  if (!ok) {\n    throw new Error(\"nope\");\n  }\n}\n"
        );
    }
}
