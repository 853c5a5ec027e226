// src/shared/storage/fault.rs
use sea_orm::{DbErr, SqlErr};

/// Classified failure coming out of the storage layer.
///
/// Adapters convert `DbErr` into this once, at the storage boundary, so
/// nothing above the repositories needs to know what a Postgres error
/// looks like.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageFault {
    /// An identifier that can never address a stored record (not a UUID).
    #[error("Malformed identifier: {0}")]
    MalformedId(String),

    /// A unique index rejected the write.
    #[error("Unique constraint violated: {0}")]
    Duplicate(String),

    /// Schema rules rejected the record. One message per violated rule.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Database error: {0}")]
    Unavailable(String),
}

impl StorageFault {
    pub fn validation<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StorageFault::Validation(messages.into_iter().map(Into::into).collect())
    }
}

impl From<DbErr> for StorageFault {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return StorageFault::Duplicate(detail);
        }

        let msg = err.to_string();
        let lowered = msg.to_lowercase();

        if lowered.contains("duplicate key") || lowered.contains("23505") {
            StorageFault::Duplicate(msg)
        } else {
            StorageFault::Unavailable(msg)
        }
    }
}
