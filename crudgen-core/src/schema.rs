//! Table schema model.

use indexmap::IndexMap;

/// Column layout of a single table.
///
/// Maps column names to TypeScript type descriptors (e.g., `"string"`,
/// `"number | null"`). Column order is the order reported by the schema
/// source and is preserved through generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    table: String,
    columns: IndexMap<String, String>,
}

impl TableSchema {
    /// Create an empty schema for `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: IndexMap::new(),
        }
    }

    /// Add a column. A repeated name replaces the earlier type in place.
    pub fn column(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.columns.insert(name.into(), ty.into());
        self
    }

    /// Build a schema from `(name, type)` pairs.
    pub fn from_columns<I, K, V>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: table.into(),
            columns: columns
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Iterate `(column, type)` pairs in schema order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a column's type.
    pub fn column_type(&self, name: &str) -> Option<&str> {
        self.columns.get(name).map(String::as_str)
    }

    /// Check whether the table has a column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_keep_insertion_order() {
        let schema = TableSchema::new("users")
            .column("id", "string")
            .column("email", "string")
            .column("age", "number | null");

        let names: Vec<_> = schema.columns().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "email", "age"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_duplicate_column_replaces_type() {
        let schema = TableSchema::new("users")
            .column("id", "number")
            .column("email", "string")
            .column("id", "string");

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.column_type("id"), Some("string"));
        assert_eq!(schema.columns().next(), Some(("id", "string")));
    }

    #[test]
    fn test_from_columns() {
        let schema = TableSchema::from_columns("posts", [("id", "number"), ("title", "string")]);
        assert_eq!(schema.table(), "posts");
        assert!(schema.has_column("title"));
        assert!(!schema.has_column("body"));
        assert!(!schema.is_empty());
    }
}
