//! Output trait for rendering reports to different formats.

use console::style;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, plain text, etc).
pub trait Output {
    /// Render a title/header.
    fn title(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a completed item (e.g., written file).
    fn success_item(&mut self, text: &str);

    /// Render a failed item with its reason.
    fn failure_item(&mut self, text: &str, reason: &str);

    /// Render a success message.
    fn success(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", style(text).cyan().bold());
    }

    fn section(&mut self, name: &str) {
        println!("{}:", style(name).bold());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("  {} {}", style(format!("{}:", key)).dim(), value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn success_item(&mut self, text: &str) {
        println!("  {} {}", style("✓").green(), text);
    }

    fn failure_item(&mut self, text: &str, reason: &str) {
        println!("  {} {}", style("✗").red(), style(text).red());
        println!("    {}", style(reason).red().dim());
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", style("✓").green().bold(), style(msg).green());
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }

    fn divider(&mut self, label: &str) {
        println!("{}", style(format!("── {} ──", label)).dim());
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Plain-text output that records lines, for asserting on rendered reports.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn title(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn success_item(&mut self, text: &str) {
        self.lines.push(format!("  ✓ {}", text));
    }

    fn failure_item(&mut self, text: &str, reason: &str) {
        self.lines.push(format!("  ✗ {}", text));
        self.lines.push(format!("    {}", reason));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("✓ {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
