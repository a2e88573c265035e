use thiserror::Error;

/// SQLSTATE reported by PostgreSQL for a unique constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Errors that can occur when interacting with the lead store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The row collides with an existing one on a unique constraint.
    #[error("Duplicate record (constraint: {})", .constraint.as_deref().unwrap_or("unknown"))]
    Duplicate { constraint: Option<String> },

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Returns true for a unique constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }

    /// Maps a sqlx error, singling out unique violations.
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
        {
            return StoreError::Duplicate {
                constraint: db_err.constraint().map(String::from),
            };
        }
        StoreError::Database(err)
    }
}

/// Result type for lead store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
