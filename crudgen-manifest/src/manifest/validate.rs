//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use crudgen_core::validate_table_name;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested tables.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "crudgen.toml");
/// ctx.validate_name("users", "table")?;
///
/// let nested = ctx.push("tables").push("users");
/// assert_eq!(nested.path_string(), "tables.users");
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["tables", "users"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Find the span of a table name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Find the span of a `key = value` entry, searching after the current
    /// table header when there is one.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let start = if self.path.is_empty() {
            0
        } else {
            src.find(&format!("[{}", self.path_string())).unwrap_or(0)
        };
        find_key_span(&src[start..], key)
            .map(|span| SourceSpan::from((start + span.offset(), span.len())))
    }

    /// Validate that a name can be used as a table or identifier name.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_table_name(name) {
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                kind,
                reason,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }

    /// Reject an empty string value.
    pub fn require_non_empty(&self, value: &str, key: &str) -> Result<()> {
        if value.trim().is_empty() {
            let field = key.rsplit('.').next().unwrap_or(key);
            return Err(self.source.validation_error_at(
                format!("{} must not be empty", key),
                self.find_key_span(field),
            ));
        }
        Ok(())
    }
}

/// Find the span of a name in a TOML source.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Search for common TOML patterns where the name appears
    let patterns = [
        format!(".{}]", name), // [tables.name]
        format!(".{}.", name), // [tables.name.columns]
        format!(".{} ", name), // inline: name = { ... }
        format!(".{}=", name), // inline without space: name={ ... }
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            let start = pos + 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Find the span of a key at the start of a line (`key = ...`).
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let is_key = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            return Some(SourceSpan::from((offset + indent, key.len())));
        }
        offset += line.len();
    }
    None
}
