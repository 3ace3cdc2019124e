//! The credential store behind the API.
//!
//! All user persistence goes through the [`UserStore`] trait so the
//! middleware and services hold an injected `Arc<dyn UserStore>` rather
//! than a concrete database handle. Production runs on
//! [`postgres::PgUserStore`]; the integration suite swaps in
//! [`memory::MemoryUserStore`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::users::model::{NewUser, UserRecord};

pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user store unavailable: {0}")]
    Unavailable(String),
    #[error("user store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Look up a user by id. `Ok(None)` means the record does not exist.
    async fn read(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;

    /// Look up a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Create a user. The caller is responsible for uniqueness checks and
    /// password hashing.
    async fn create(&self, new_user: NewUser) -> Result<UserRecord, StoreError>;

    /// All users, oldest first.
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Users whose username or email contains `query` (case-insensitive).
    async fn search(&self, query: &str) -> Result<Vec<UserRecord>, StoreError>;

    /// Delete a user by id. Returns `false` if no record matched.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
