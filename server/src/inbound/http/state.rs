//! Shared application state handed to HTTP handlers.

use std::sync::Arc;

use crate::domain::ports::{OfferRepository, OrderRepository, UserRepository};

/// Repository handles the HTTP handlers resolve their work through.
///
/// Handlers depend on the port traits only, so tests can swap in stub
/// repositories without touching the persistence layer.
#[derive(Clone)]
pub struct HttpState {
    users: Arc<dyn UserRepository>,
    orders: Arc<dyn OrderRepository>,
    offers: Arc<dyn OfferRepository>,
}

impl HttpState {
    /// Bundle the repository ports into a single shareable state value.
    pub fn new(
        users: Arc<dyn UserRepository>,
        orders: Arc<dyn OrderRepository>,
        offers: Arc<dyn OfferRepository>,
    ) -> Self {
        Self {
            users,
            orders,
            offers,
        }
    }

    /// Access the user repository port.
    #[must_use]
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Access the order repository port.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderRepository {
        self.orders.as_ref()
    }

    /// Access the offer repository port.
    #[must_use]
    pub fn offers(&self) -> &dyn OfferRepository {
        self.offers.as_ref()
    }
}
