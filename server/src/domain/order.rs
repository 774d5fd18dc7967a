//! Order records and payload mappers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::dates::ApiDate;

/// A persisted order record. Dates serialize in the store's native ISO form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Primary key.
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    /// Assumed non-negative; not validated.
    pub price: i32,
    /// Reference to the ordering user; enforcement is a deployment choice.
    pub customer_id: i32,
    /// Reference to the executing user; enforcement is a deployment choice.
    pub executor_id: i32,
}

/// Creation payload for `POST /orders/` and the sample data fixture.
///
/// The fixture supplies explicit ids; request-driven creation normally omits
/// the id and lets the store assign one. Dates arrive as `MM/DD/YYYY` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "01/15/2024")]
    pub start_date: ApiDate,
    #[schema(value_type = String, example = "02/01/2024")]
    pub end_date: ApiDate,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

/// Full-overwrite payload for `PUT /orders/{id}/`: every field is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderChanges {
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "01/15/2024")]
    pub start_date: ApiDate,
    #[schema(value_type = String, example = "02/01/2024")]
    pub end_date: ApiDate,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}
