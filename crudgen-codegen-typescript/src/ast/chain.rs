//! TypeScript method chain builder for fluent query APIs.

use crudgen_codegen::CodeFragment;

/// A method call in a chain.
#[derive(Debug, Clone)]
struct Call {
    method: String,
    args: Vec<String>,
}

impl Call {
    fn render(&self) -> String {
        format!(".{}({})", self.method, self.args.join(", "))
    }
}

/// Builder for method chains on a receiver (`supabase.from(..).select(..)`).
#[derive(Debug, Clone)]
pub struct MethodChain {
    receiver: String,
    calls: Vec<Call>,
}

impl MethodChain {
    /// Start a chain on a plain receiver expression.
    pub fn on(receiver: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            calls: Vec::new(),
        }
    }

    /// Add a method call to the chain.
    pub fn call(self, method: impl Into<String>, arg: impl Into<String>) -> Self {
        self.call_args(method, vec![arg.into()])
    }

    /// Add a method call with multiple arguments.
    pub fn call_args(mut self, method: impl Into<String>, args: Vec<String>) -> Self {
        self.calls.push(Call {
            method: method.into(),
            args,
        });
        self
    }

    /// Add a method call with no arguments.
    pub fn call_empty(self, method: impl Into<String>) -> Self {
        self.call_args(method, Vec::new())
    }

    /// Build the chain as a single-line string.
    pub fn build_inline(&self) -> String {
        let mut result = self.receiver.clone();
        for call in &self.calls {
            result.push_str(&call.render());
        }
        result
    }

    /// Render the chain as a statement: `prefix` precedes the receiver, each
    /// call goes on its own indented line and the last one ends with `;`.
    pub fn statement(&self, prefix: &str) -> CodeFragment {
        let head = format!("{}{}", prefix, self.receiver);
        let Some((last, rest)) = self.calls.split_last() else {
            return CodeFragment::line(format!("{};", head));
        };

        let mut lines: Vec<CodeFragment> = rest
            .iter()
            .map(|call| CodeFragment::line(call.render()))
            .collect();
        lines.push(CodeFragment::line(format!("{};", last.render())));

        CodeFragment::sequence(vec![CodeFragment::line(head), CodeFragment::indent(lines)])
    }
}
