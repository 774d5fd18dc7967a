//! Diesel-backed sample data seeding adapter.
//!
//! Applies the whole fixture within a single transaction: a primary key
//! collision anywhere rolls back every insert.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{RepositoryError, SeedBatch, SeedRepository, SeedSummary};

use super::diesel_error_mapping::map_interact_error;
use super::models::{NewOrderRow, OfferRow, UserRow};
use super::pool::DbPool;
use super::schema::{offers, orders, users};

/// Diesel implementation of [`SeedRepository`].
#[derive(Clone)]
pub struct DieselSeedRepository {
    pool: DbPool,
}

impl DieselSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeedRepository for DieselSeedRepository {
    async fn apply(&self, batch: SeedBatch) -> Result<SeedSummary, RepositoryError> {
        let user_rows: Vec<UserRow> = batch.users.into_iter().map(UserRow::from).collect();
        let order_rows: Vec<NewOrderRow> = batch.orders.into_iter().map(NewOrderRow::from).collect();
        let offer_rows: Vec<OfferRow> = batch.offers.into_iter().map(OfferRow::from).collect();
        let summary = SeedSummary {
            users: user_rows.len(),
            orders: order_rows.len(),
            offers: offer_rows.len(),
        };

        self.pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    diesel::insert_into(users::table)
                        .values(&user_rows)
                        .execute(conn)?;
                    diesel::insert_into(orders::table)
                        .values(&order_rows)
                        .execute(conn)?;
                    diesel::insert_into(offers::table)
                        .values(&offer_rows)
                        .execute(conn)?;
                    Ok(())
                })
            })
            .await
            .map_err(map_interact_error)?;

        debug!(
            users = summary.users,
            orders = summary.orders,
            offers = summary.offers,
            "seed batch applied"
        );
        Ok(summary)
    }
}
