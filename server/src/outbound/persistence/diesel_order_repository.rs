//! Diesel-backed order repository adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{OrderRepository, RepositoryError};
use crate::domain::{NewOrder, Order, OrderChanges};

use super::diesel_error_mapping::map_interact_error;
use super::models::{NewOrderRow, OrderChangesRow, OrderRow};
use super::pool::DbPool;
use super::schema::orders;

/// Diesel implementation of [`OrderRepository`].
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn insert(&self, order: NewOrder) -> Result<(), RepositoryError> {
        let row = NewOrderRow::from(order);
        self.pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    diesel::insert_into(orders::table)
                        .values(&row)
                        .execute(conn)
                })
            })
            .await
            .map(|_| ())
            .map_err(map_interact_error)
    }

    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = self
            .pool
            .interact(|conn| {
                conn.transaction(|conn| {
                    orders::table
                        .order(orders::id.asc())
                        .select(OrderRow::as_select())
                        .load(conn)
                })
            })
            .await
            .map_err(map_interact_error)?;
        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let row = self
            .pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    orders::table
                        .find(id)
                        .select(OrderRow::as_select())
                        .first(conn)
                        .optional()
                })
            })
            .await
            .map_err(map_interact_error)?;
        Ok(row.map(Order::from))
    }

    async fn update(&self, id: i32, changes: OrderChanges) -> Result<bool, RepositoryError> {
        let changeset = OrderChangesRow::from(changes);
        let affected = self
            .pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    diesel::update(orders::table.find(id))
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
                conn.transaction(|conn| diesel::delete(orders::table.find(id)).execute(conn))
            })
            .await
            .map_err(map_interact_error)?;
        Ok(affected > 0)
    }
}
