//! Snapshot tests for TypeScript code generation.
//!
//! These tests verify that the generated TypeScript code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use crudgen_codegen_typescript::{Generator, GeneratorOptions, LanguageCodegen};
use crudgen_core::TableSchema;

/// Generate code for a schema and return files keyed by relative path.
fn generate_files(schema: &TableSchema, options: &GeneratorOptions) -> Vec<(String, String)> {
    Generator::new(schema, options)
        .preview()
        .into_iter()
        .map(|f| (f.path.replace('\\', "/"), f.content))
        .collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

fn users() -> TableSchema {
    TableSchema::new("users")
        .column("id", "string")
        .column("email", "string")
}

fn events() -> TableSchema {
    TableSchema::new("events")
        .column("id", "number")
        .column("title", "string")
        .column("date", "string | null")
}

#[test]
fn test_users_create() {
    let files = generate_files(&users(), &GeneratorOptions::default());
    let file = get_file(&files, "data/users/create.ts").expect("create.ts not found");
    insta::assert_snapshot!("users_create", file);
}

#[test]
fn test_users_read() {
    let files = generate_files(&users(), &GeneratorOptions::default());
    let file = get_file(&files, "data/users/read.ts").expect("read.ts not found");
    insta::assert_snapshot!("users_read", file);
}

#[test]
fn test_users_update() {
    let files = generate_files(&users(), &GeneratorOptions::default());
    let file = get_file(&files, "data/users/update.ts").expect("update.ts not found");
    insta::assert_snapshot!("users_update", file);
}

#[test]
fn test_users_delete() {
    let files = generate_files(&users(), &GeneratorOptions::default());
    let file = get_file(&files, "data/users/delete.ts").expect("delete.ts not found");
    insta::assert_snapshot!("users_delete", file);
}

#[test]
fn test_users_list() {
    let files = generate_files(&users(), &GeneratorOptions::default());
    let file = get_file(&files, "data/users/list.ts").expect("list.ts not found");
    insta::assert_snapshot!("users_list", file);
}

#[test]
fn test_events_list_orders_by_date() {
    let files = generate_files(&events(), &GeneratorOptions::default());
    let file = get_file(&files, "data/events/list.ts").expect("list.ts not found");
    insta::assert_snapshot!("events_list", file);
}

#[test]
fn test_events_read_uses_numeric_key() {
    let files = generate_files(&events(), &GeneratorOptions::default());
    let file = get_file(&files, "data/events/read.ts").expect("read.ts not found");
    insta::assert_snapshot!("events_read", file);
}

#[test]
fn test_custom_key_column() {
    let schema = TableSchema::new("products")
        .column("sku", "string")
        .column("price", "number");
    let options = GeneratorOptions::default().with_key_column("sku");
    let files = generate_files(&schema, &options);

    let update = get_file(&files, "data/products/update.ts").expect("update.ts not found");
    assert!(update.contains(".eq(\"sku\", id)"));

    let delete = get_file(&files, "data/products/delete.ts").expect("delete.ts not found");
    assert!(delete.contains("  id: string;\n"));
    assert!(delete.contains(".eq(\"sku\", id);"));
}

#[test]
fn test_unusual_column_names_are_quoted() {
    let schema = TableSchema::new("people")
        .column("id", "string")
        .column("first name", "string | null");
    let files = generate_files(&schema, &GeneratorOptions::default());

    let create = get_file(&files, "data/people/create.ts").expect("create.ts not found");
    assert!(create.contains("  \"first name\": string | null;\n"));

    let update = get_file(&files, "data/people/update.ts").expect("update.ts not found");
    assert!(update.contains("  \"first name\"?: string | null;\n"));
}

#[test]
fn test_generated_files_have_no_trailing_whitespace() {
    let files = generate_files(&events(), &GeneratorOptions::default());
    for (path, content) in &files {
        for line in content.lines() {
            assert_eq!(line, line.trim_end(), "trailing whitespace in {}", path);
        }
        assert!(content.ends_with("}\n"), "{} must end with a newline", path);
    }
}
