//! Port for the startup sample data loader.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{NewOffer, NewOrder, NewUser};

use super::RepositoryError;

/// The full fixture contents, deserialized through the same payload types
/// the HTTP mappers use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedBatch {
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub orders: Vec<NewOrder>,
    #[serde(default)]
    pub offers: Vec<NewOffer>,
}

/// Row counts inserted by a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

/// Applies a seed batch in one all-or-nothing transaction.
///
/// Not idempotent: re-applying a batch collides on primary keys and the
/// whole transaction rolls back.
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Insert every record of the batch atomically.
    async fn apply(&self, batch: SeedBatch) -> Result<SeedSummary, RepositoryError>;
}
