//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented code line by line.
///
/// # Example
///
/// ```
/// use crudgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("if (error) {")
///     .push_indent()
///     .push_line("throw error;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "if (error) {\n  throw error;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    ///
    /// An empty line is written without indentation so no trailing
    /// whitespace ends up in the output.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("{")
            .push_indent()
            .push_line("a();")
            .push_line("")
            .push_line("b();")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "{\n  a();\n\n  b();\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "if (error) {",
                    vec![CodeFragment::line("throw error;")],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "if (error) {\n  throw error;\n}\n");
    }

    #[test]
    fn test_emit_nested_indent_fragment() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::sequence(vec![
                    CodeFragment::line("await supabase"),
                    CodeFragment::indent(vec![
                        CodeFragment::line(".from(\"users\")"),
                        CodeFragment::line(".select();"),
                    ]),
                ])]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Nested);
        assert_eq!(
            builder.build(),
            "await supabase\n  .from(\"users\")\n  .select();\n"
        );
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::typescript();
        builder.apply_fragment(CodeFragment::block(
            "items:",
            vec![CodeFragment::line("- a"), CodeFragment::blank()],
            None,
        ));
        assert_eq!(builder.build(), "items:\n  - a\n\n");
    }
}
