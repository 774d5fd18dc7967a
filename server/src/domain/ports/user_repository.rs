//! Port for user persistence adapters.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges};

use super::RepositoryError;

/// Create/read/update/delete access to user records.
///
/// Every operation runs in its own transaction scope; lookups of absent ids
/// return `None` rather than failing.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    async fn insert(&self, user: NewUser) -> Result<(), RepositoryError>;

    /// Fetch every user in id order.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Fetch a user by primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;

    /// Overwrite every field of an existing user. Returns whether a row
    /// was affected.
    async fn update(&self, id: i32, changes: UserChanges) -> Result<bool, RepositoryError>;

    /// Remove a user by primary key. Returns whether a row was affected.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
