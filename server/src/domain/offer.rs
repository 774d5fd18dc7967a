//! Offer records and payload mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted offer: an executor volunteering for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Offer {
    /// Primary key.
    pub id: i32,
    /// Reference to the order; enforcement is a deployment choice.
    pub order_id: i32,
    /// Reference to the executing user; enforcement is a deployment choice.
    pub executor_id: i32,
}

/// Creation payload for `POST /offers/{id}/` and the sample data fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewOffer {
    pub id: i32,
    pub order_id: i32,
    pub executor_id: i32,
}

/// Full-overwrite payload for `PUT /offers/{id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OfferChanges {
    pub order_id: i32,
    pub executor_id: i32,
}
