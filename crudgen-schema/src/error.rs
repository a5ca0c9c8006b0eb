use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema lookups (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("schema for table '{table}' not found")]
    #[diagnostic(
        code(crudgen::schema_not_found),
        help(
            "declare its columns under [tables.{table}.columns] in crudgen.toml, or configure [database] to read them from PostgreSQL"
        )
    )]
    NotFound { table: String },

    #[error("database connection string is not set")]
    #[diagnostic(
        code(crudgen::missing_database_url),
        help("set the {env} environment variable or pass --database-url")
    )]
    MissingDatabaseUrl { env: String },

    #[error("invalid database connection string")]
    #[diagnostic(code(crudgen::invalid_database_url))]
    InvalidDatabaseUrl {
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to read columns of '{table}' from the database")]
    #[diagnostic(code(crudgen::database_error))]
    Database {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}

impl Error {
    pub fn not_found(table: impl Into<String>) -> Box<Self> {
        Box::new(Error::NotFound {
            table: table.into(),
        })
    }
}
