//! Persistence for users.
//!
//! Handlers only ever talk to a [`UserStore`], so the driver stays behind this module.

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::models::{NewUser, User};

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod postgres;

#[cfg(test)]
pub(crate) use memory::MemoryUserStore;
pub(crate) use postgres::PgUserStore;

/// Any possible store errors
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    /// A unique constraint (the user email) was violated.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("database unreachable: {0}")]
    Unreachable(String),

    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::DuplicateKey(detail),
            _ => match err {
                DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                    StoreError::Unreachable(err.to_string())
                }
                other => StoreError::Database(other),
            },
        }
    }
}

/// The operations the HTTP layer needs from the backing store.
#[async_trait]
pub(crate) trait UserStore: Send + Sync {
    /// Create the `users` table if it is absent.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Run a trivial statement to prove the store answers.
    async fn check_connectivity(&self) -> Result<(), StoreError>;

    /// All users, newest first.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError>;
}
