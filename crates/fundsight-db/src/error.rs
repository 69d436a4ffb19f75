//! Database-specific error types and conversions.

use fundsight_core::error::FundsightError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Record already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<DbError> for FundsightError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => FundsightError::NotFound { entity, id },
            DbError::AlreadyExists { entity } => FundsightError::AlreadyExists { entity },
            other => FundsightError::Database(other.to_string()),
        }
    }
}
