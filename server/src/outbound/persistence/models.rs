//! Row structs bridging Diesel and the domain record types.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{
    NewOffer, NewOrder, NewUser, Offer, OfferChanges, Order, OrderChanges, User, UserChanges,
};

use super::schema::{offers, orders, users};

/// Full user row; doubles as the insert shape since callers supply the id.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Full-overwrite changeset for a user; excludes the primary key.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangesRow {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl From<NewUser> for UserRow {
    fn from(user: NewUser) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            email: user.email,
            role: user.role,
            phone: user.phone,
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
            email: row.email,
            role: row.role,
            phone: row.phone,
        }
    }
}

impl From<UserChanges> for UserChangesRow {
    fn from(changes: UserChanges) -> Self {
        Self {
            first_name: changes.first_name,
            last_name: changes.last_name,
            age: changes.age,
            email: changes.email,
            role: changes.role,
            phone: changes.phone,
        }
    }
}

/// Order row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

/// Insert shape for an order; a `None` id lets the store assign one.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

/// Full-overwrite changeset for an order; excludes the primary key.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderChangesRow {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

impl From<NewOrder> for NewOrderRow {
    fn from(order: NewOrder) -> Self {
        Self {
            id: order.id,
            name: order.name,
            description: order.description,
            start_date: order.start_date.into_inner(),
            end_date: order.end_date.into_inner(),
            address: order.address,
            price: order.price,
            customer_id: order.customer_id,
            executor_id: order.executor_id,
        }
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            address: row.address,
            price: row.price,
            customer_id: row.customer_id,
            executor_id: row.executor_id,
        }
    }
}

impl From<OrderChanges> for OrderChangesRow {
    fn from(changes: OrderChanges) -> Self {
        Self {
            name: changes.name,
            description: changes.description,
            start_date: changes.start_date.into_inner(),
            end_date: changes.end_date.into_inner(),
            address: changes.address,
            price: changes.price,
            customer_id: changes.customer_id,
            executor_id: changes.executor_id,
        }
    }
}

/// Full offer row; doubles as the insert shape since callers supply the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = offers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OfferRow {
    pub id: i32,
    pub order_id: i32,
    pub executor_id: i32,
}

/// Full-overwrite changeset for an offer; excludes the primary key.
#[derive(Debug, Clone, Copy, AsChangeset)]
#[diesel(table_name = offers)]
pub struct OfferChangesRow {
    pub order_id: i32,
    pub executor_id: i32,
}

impl From<NewOffer> for OfferRow {
    fn from(offer: NewOffer) -> Self {
        Self {
            id: offer.id,
            order_id: offer.order_id,
            executor_id: offer.executor_id,
        }
    }
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            executor_id: row.executor_id,
        }
    }
}

impl From<OfferChanges> for OfferChangesRow {
    fn from(changes: OfferChanges) -> Self {
        Self {
            order_id: changes.order_id,
            executor_id: changes.executor_id,
        }
    }
}
