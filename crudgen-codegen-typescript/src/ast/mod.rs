//! TypeScript AST builders for generating imports, interfaces, functions
//! and client call chains.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod chain;
mod fns;
mod imports;
mod interface;

pub use chain::MethodChain;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::Interface;

/// Render `s` as a double-quoted TypeScript string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render an object/interface property key, quoting it when it is not a
/// plain identifier (e.g., a column named `first name`).
pub fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let plain = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if plain {
        name.to_string()
    } else {
        string_literal(name)
    }
}
