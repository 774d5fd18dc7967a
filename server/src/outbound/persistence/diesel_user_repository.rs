//! Diesel-backed user repository adapter.
//!
//! Every operation acquires one transaction scope: committed on success,
//! rolled back on any failure.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{NewUser, User, UserChanges};

use super::diesel_error_mapping::map_interact_error;
use super::models::{UserChangesRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: NewUser) -> Result<(), RepositoryError> {
        let row = UserRow::from(user);
        self.pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    diesel::insert_into(users::table).values(&row).execute(conn)
                })
            })
            .await
            .map(|_| ())
            .map_err(map_interact_error)
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = self
            .pool
            .interact(|conn| {
                conn.transaction(|conn| {
                    users::table
                        .order(users::id.asc())
                        .select(UserRow::as_select())
                        .load(conn)
                })
            })
            .await
            .map_err(map_interact_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let row = self
            .pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    users::table
                        .find(id)
                        .select(UserRow::as_select())
                        .first(conn)
                        .optional()
                })
            })
            .await
            .map_err(map_interact_error)?;
        Ok(row.map(User::from))
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<bool, RepositoryError> {
        let changeset = UserChangesRow::from(changes);
        let affected = self
            .pool
            .interact(move |conn| {
                conn.transaction(|conn| {
                    diesel::update(users::table.find(id))
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
                conn.transaction(|conn| diesel::delete(users::table.find(id)).execute(conn))
            })
            .await
            .map_err(map_interact_error)?;
        Ok(affected > 0)
    }
}
