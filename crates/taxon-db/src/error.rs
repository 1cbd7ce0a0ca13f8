//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// Record not found
    #[error("record not found")]
    NotFound,

    /// Unique constraint violated (e.g. duplicate email or category name)
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return Self::UniqueViolation(constraint);
            }
        }
        Self::Sqlx(err)
    }
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;
