//! Auth errors

use thiserror::Error;

/// Authentication errors
///
/// The three token variants are collapsed to a single 401 at the HTTP
/// boundary; they stay distinct here for logs and tests.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Token could not be parsed at all
    #[error("malformed token")]
    MalformedToken,

    /// Token parsed but its signature does not verify
    #[error("bad token signature")]
    BadSignature,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Invalid credentials (unknown email or wrong password)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token was valid but its subject cannot be resolved
    #[error("unknown subject")]
    UnknownSubject,

    /// Email already registered
    #[error("email already registered")]
    DuplicateEmail,

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedToken
            | Self::BadSignature
            | Self::TokenExpired
            | Self::InvalidCredentials
            | Self::UnknownSubject => 401,
            Self::DuplicateEmail => 409,
            Self::Hashing(_) | Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::BadSignature => "BAD_SIGNATURE",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnknownSubject => "UNKNOWN_SUBJECT",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::Hashing(_) => "HASHING_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<taxon_db::DbError> for AuthError {
    fn from(err: taxon_db::DbError) -> Self {
        match err {
            taxon_db::DbError::UniqueViolation(_) => Self::DuplicateEmail,
            err => {
                tracing::error!("Database error: {}", err);
                Self::Database(err.to_string())
            }
        }
    }
}
