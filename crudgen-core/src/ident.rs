//! Table name checks.
//!
//! A table name ends up both as a directory name and inside TypeScript
//! identifiers (`createUsers`, `const { data: users }`), so it has to be a
//! plain identifier that JavaScript accepts as a binding.

/// JavaScript reserved words (ES2015+ strict mode, plus literals and the
/// names strict mode forbids as bindings).
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check if a name is a JavaScript reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Validate a table name.
///
/// Returns `None` if valid, `Some(reason)` if invalid.
pub fn validate_table_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_reserved_word(name) {
        return Some("name is a JavaScript reserved word");
    }

    None
}
