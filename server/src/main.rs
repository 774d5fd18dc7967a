//! Service entry-point: configuration, storage, seeding, and route wiring.

use std::ffi::OsString;
use std::net::SocketAddr;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use taskmarket::inbound::http::health::HealthState;
use taskmarket::outbound::persistence::{DbPool, DieselSeedRepository, PoolConfig};
use taskmarket::sample_data::{SampleDataSettings, seed_sample_data_on_startup};
use taskmarket::server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter([OsString::from("taskmarket")])
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr: SocketAddr = settings
        .bind_addr()
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let pool_config = PoolConfig::new(settings.database_url())
        .with_enforce_foreign_keys(settings.enforce_foreign_keys);
    let pool = DbPool::new(pool_config)
        .map_err(|e| std::io::Error::other(format!("failed to build pool: {e}")))?;
    pool.run_migrations()
        .map_err(|e| std::io::Error::other(format!("failed to run migrations: {e}")))?;

    let sample_settings = SampleDataSettings::load_from_iter([OsString::from("taskmarket")])
        .map_err(|e| std::io::Error::other(format!("failed to load seed settings: {e}")))?;
    let seed_repository = DieselSeedRepository::new(pool.clone());
    seed_sample_data_on_startup(&sample_settings, &seed_repository)
        .await
        .map_err(|e| std::io::Error::other(format!("sample data seeding failed: {e}")))?;

    info!(%bind_addr, "starting server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))?;
    server.await
}
