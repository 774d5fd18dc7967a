//! Diesel-backed offer repository adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{OfferRepository, RepositoryError};
use crate::domain::{NewOffer, Offer, OfferChanges};

use super::diesel_error_mapping::map_interact_error;
use super::models::{OfferChangesRow, OfferRow};
use super::pool::DbPool;
use super::schema::offers;

/// Diesel implementation of [`OfferRepository`].
#[derive(Clone)]
pub struct DieselOfferRepository {
    pool: DbPool,
}

impl DieselOfferRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferRepository for DieselOfferRepository {
    async fn insert(&self, offer: NewOffer) -> Result<(), RepositoryError> {
        let row = OfferRow::from(offer);
        self.pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    diesel::insert_into(offers::table)
                        .values(&row)
                        .execute(conn)
                })
            })
            .await
            .map(|_| ())
            .map_err(map_interact_error)
    }

    async fn list(&self) -> Result<Vec<Offer>, RepositoryError> {
        let rows = self
            .pool
            .interact(|conn| {
                conn.transaction(|conn| {
                    offers::table
                        .order(offers::id.asc())
                        .select(OfferRow::as_select())
                        .load(conn)
                })
            })
            .await
            .map_err(map_interact_error)?;
        Ok(rows.into_iter().map(Offer::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Offer>, RepositoryError> {
        let row = self
            .pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    offers::table
                        .find(id)
                        .select(OfferRow::as_select())
                        .first(conn)
                        .optional()
                })
            })
            .await
            .map_err(map_interact_error)?;
        Ok(row.map(Offer::from))
    }

    async fn update(&self, id: i32, changes: OfferChanges) -> Result<bool, RepositoryError> {
        let changeset = OfferChangesRow::from(changes);
        let affected = self
            .pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    diesel::update(offers::table.find(id))
                        .set(&changeset)
                        .execute(conn)
                })
            })
            .await
            .map_err(map_interact_error)?;
        Ok(affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let affected = self
            .pool
            .interact(move |conn| {
                conn.transaction(|conn| diesel::delete(offers::table.find(id)).execute(conn))
            })
            .await
            .map_err(map_interact_error)?;
        Ok(affected > 0)
    }
}
