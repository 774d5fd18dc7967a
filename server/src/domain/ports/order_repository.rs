//! Port for order persistence adapters.

use async_trait::async_trait;

use crate::domain::{NewOrder, Order, OrderChanges};

use super::RepositoryError;

/// Create/read/update/delete access to order records.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order. When the payload omits the id the store assigns
    /// one.
    async fn insert(&self, order: NewOrder) -> Result<(), RepositoryError>;

    /// Fetch every order in id order.
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Fetch an order by primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;

    /// Overwrite every field of an existing order. Returns whether a row
    /// was affected.
    async fn update(&self, id: i32, changes: OrderChanges) -> Result<bool, RepositoryError>;

    /// Remove an order by primary key. Returns whether a row was affected.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
