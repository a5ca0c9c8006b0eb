use async_trait::async_trait;
use crudgen_core::TableSchema;

use crate::{Result, SchemaSource};

/// Asks each source in turn; the first one that knows the table wins.
#[derive(Default)]
pub struct LayeredSource {
    sources: Vec<Box<dyn SchemaSource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower precedence than those already added.
    pub fn with(mut self, source: impl SchemaSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

#[async_trait]
impl SchemaSource for LayeredSource {
    fn name(&self) -> &'static str {
        "layered"
    }

    async fn table_schema(&self, table: &str) -> Result<Option<TableSchema>> {
        for source in &self.sources {
            tracing::debug!(table, source = source.name(), "looking up schema");
            if let Some(schema) = source.table_schema(table).await? {
                return Ok(Some(schema));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{Error, require_schema};

    struct Fixed {
        name: &'static str,
        schema: Option<TableSchema>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SchemaSource for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn table_schema(&self, _table: &str) -> Result<Option<TableSchema>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.schema.clone())
        }
    }

    fn fixed(name: &'static str, schema: Option<TableSchema>) -> (Fixed, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Fixed {
            name,
            schema,
            calls: Arc::clone(&calls),
        };
        (source, calls)
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let (first, first_calls) =
            fixed("first", Some(TableSchema::new("users").column("id", "string")));
        let (second, second_calls) =
            fixed("second", Some(TableSchema::new("users").column("id", "number")));
        let source = LayeredSource::new().with(first).with(second);

        let schema = source.table_schema("users").await.unwrap().unwrap();

        assert_eq!(schema.column_type("id"), Some("string"));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_later_sources() {
        let (first, _) = fixed("first", None);
        let (second, _) =
            fixed("second", Some(TableSchema::new("users").column("id", "number")));
        let source = LayeredSource::new().with(first).with(second);

        let schema = source.table_schema("users").await.unwrap().unwrap();
        assert_eq!(schema.column_type("id"), Some("number"));
    }

    #[tokio::test]
    async fn test_require_schema_reports_not_found() {
        let (empty, _) = fixed("empty", None);
        let source = LayeredSource::new().with(empty);

        let err = require_schema(&source, "ghost").await.unwrap_err();

        assert!(matches!(*err, Error::NotFound { ref table } if table == "ghost"));
        assert_eq!(err.to_string(), "schema for table 'ghost' not found");
    }

    #[tokio::test]
    async fn test_empty_layer_knows_nothing() {
        let source = LayeredSource::new();
        assert!(source.table_schema("users").await.unwrap().is_none());
    }
}
