//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Repository method returns DbResult<T>                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DashboardData logs it and returns the documented fallback             │
//! │  (empty list, zeroed cards, None). Pages never see a DbError.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A lookup by id matched nothing.
    ///
    /// Repositories report absence as `Ok(None)`; this value exists so the
    /// miss can be logged like any other error.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A primary key or UNIQUE column already holds the value.
    #[error("Duplicate value for {constraint}")]
    UniqueViolation { constraint: String },

    /// An invoice references a customer that doesn't exist.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A CHECK or NOT NULL rule rejected the row (negative amount, unknown
    /// status).
    #[error("Constraint violation: {0}")]
    CheckViolation(String),

    /// The store could not be opened, or the pool was already closed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// An embedded migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// SQLite rejected the statement, e.g. a table is missing.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No connection became free before the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Row decoding and anything else sqlx reports.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// Database error, by ErrorKind:
///   UniqueViolation             → DbError::UniqueViolation
///   ForeignKeyViolation         → DbError::ForeignKeyViolation
///   CheckViolation / NotNull    → DbError::CheckViolation
///   other                       → DbError::QueryFailed
/// PoolTimedOut                  → DbError::PoolExhausted
/// PoolClosed / Io               → DbError::ConnectionFailed
/// Other                         → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.kind() {
                    // "UNIQUE constraint failed: customers.id"
                    ErrorKind::UniqueViolation => DbError::UniqueViolation {
                        constraint: message
                            .rsplit(": ")
                            .next()
                            .unwrap_or(message.as_str())
                            .to_string(),
                    },
                    ErrorKind::ForeignKeyViolation => DbError::ForeignKeyViolation(message),
                    ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                        DbError::CheckViolation(message)
                    }
                    _ => DbError::QueryFailed(message),
                }
            }
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) => DbError::ConnectionFailed(err.to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
