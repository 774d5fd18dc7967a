//! Port abstractions implemented by storage adapters.
//!
//! Handlers and the seed loader depend only on these traits, never on the
//! Diesel adapters behind them.

mod macros;
mod offer_repository;
mod order_repository;
mod seed_repository;
mod user_repository;

pub(crate) use macros::define_port_error;
pub use offer_repository::OfferRepository;
pub use order_repository::OrderRepository;
pub use seed_repository::{SeedBatch, SeedRepository, SeedSummary};
pub use user_repository::UserRepository;

define_port_error! {
    /// Persistence errors raised by storage adapters.
    pub enum RepositoryError {
        /// The store could not be reached or the connection was lost.
        Connection { message: String } => "storage connection failed: {message}",
        /// A write collided with an existing primary key.
        Duplicate { message: String } => "duplicate record: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "storage query failed: {message}",
    }
}
