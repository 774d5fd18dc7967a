//! Port for offer persistence adapters.

use async_trait::async_trait;

use crate::domain::{NewOffer, Offer, OfferChanges};

use super::RepositoryError;

/// Create/read/update/delete access to offer records.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Insert a new offer record.
    async fn insert(&self, offer: NewOffer) -> Result<(), RepositoryError>;

    /// Fetch every offer in id order.
    async fn list(&self) -> Result<Vec<Offer>, RepositoryError>;

    /// Fetch an offer by primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Offer>, RepositoryError>;

    /// Overwrite every field of an existing offer. Returns whether a row
    /// was affected.
    async fn update(&self, id: i32, changes: OfferChanges) -> Result<bool, RepositoryError>;

    /// Remove an offer by primary key. Returns whether a row was affected.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
