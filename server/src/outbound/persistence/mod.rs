//! Diesel SQLite persistence adapters.

mod diesel_error_mapping;
mod diesel_offer_repository;
mod diesel_order_repository;
mod diesel_seed_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_offer_repository::DieselOfferRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_seed_repository::DieselSeedRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, InteractError, MIGRATIONS, PoolConfig, PoolError};
