use thiserror::Error;

#[derive(Debug, Error)]
pub enum PetMealsDbError {
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parameter conversion error: {0}")]
    ParameterError(String),

    /// A WHERE clause was requested with no predicates under `EmptyFilterPolicy::Reject`.
    #[error("{operation} on `{table}` requires at least one filter")]
    EmptyFilter {
        operation: &'static str,
        table: String,
    },

    #[error("update on `{table}` requires at least one assignment")]
    EmptyAssignments { table: String },
}
