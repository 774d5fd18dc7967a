//! Shared helpers for integration tests running against a real in-memory
//! SQLite store.

use actix_web::web;
use taskmarket::inbound::http::health::HealthState;
use taskmarket::inbound::http::state::HttpState;
use taskmarket::outbound::persistence::{DbPool, PoolConfig};
use taskmarket::server::build_http_state;

/// Build a migrated in-memory pool private to one test.
pub fn fresh_pool() -> DbPool {
    let pool = DbPool::new(PoolConfig::new(":memory:")).expect("in-memory pool");
    pool.run_migrations().expect("migrations apply");
    pool
}

/// Wrap the pool's adapters into the app data the server factory expects.
pub fn app_states(pool: &DbPool) -> (web::Data<HealthState>, web::Data<HttpState>) {
    (
        web::Data::new(HealthState::new()),
        web::Data::new(build_http_state(pool)),
    )
}
