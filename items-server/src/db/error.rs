//! Database error type

/// Errors raised by the persistence layer.
///
/// No variant is retried; all surface as a 500 at the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Store unreachable, credentials rejected, or pool exhausted
    #[error("database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Statement or commit failed
    #[error("database query error: {0}")]
    Query(#[from] sqlx::Error),

    /// No unused id left in the id space
    #[error("item id space exhausted")]
    IdsExhausted,
}

