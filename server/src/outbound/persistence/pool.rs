//! Connection pool for Diesel SQLite connections.
//!
//! Wraps `diesel::r2d2` and runs blocking Diesel work on
//! `tokio::task::spawn_blocking` via [`DbPool::interact`]. In-memory database
//! URLs are pinned to a single persistent connection, since every SQLite
//! `:memory:` connection is its own database and recycling the connection
//! would drop the store.

use std::time::Duration;

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::debug;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors that can occur while building or administering the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },

    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to apply pending schema migrations.
    #[error("failed to run migrations: {message}")]
    Migration { message: String },
}

impl PoolError {
    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration {
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`DbPool::interact`].
#[derive(Debug, thiserror::Error)]
pub enum InteractError {
    /// A connection could not be checked out within the timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The blocking task was cancelled or panicked.
    #[error("blocking storage task failed: {message}")]
    Task { message: String },

    /// The Diesel operation itself failed.
    #[error(transparent)]
    Query(#[from] diesel::result::Error),
}

/// Configuration for the database connection pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
    enforce_foreign_keys: bool,
}

impl PoolConfig {
    /// Create a new configuration with the given database URL.
    ///
    /// Defaults: 10 connections, 30 second checkout timeout, foreign keys
    /// unenforced.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
            enforce_foreign_keys: false,
        }
    }

    /// Set the maximum number of connections in the pool.
    ///
    /// Ignored for in-memory URLs, which are always pinned to one
    /// connection.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Enable SQLite foreign key enforcement on every connection.
    pub fn with_enforce_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    fn is_in_memory(&self) -> bool {
        self.database_url == ":memory:" || self.database_url.contains("mode=memory")
    }
}

/// Per-connection setup applied on checkout from the manager.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    enforce_foreign_keys: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        if self.enforce_foreign_keys {
            conn.batch_execute("PRAGMA foreign_keys = ON;")
                .map_err(diesel::r2d2::Error::QueryError)?;
        }
        Ok(())
    }
}

/// Connection pool for SQLite via Diesel.
///
/// Cloning is cheap; all clones share the same pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] if the pool cannot be constructed or the
    /// initial connection fails.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url());
        let options = ConnectionOptions {
            enforce_foreign_keys: config.enforce_foreign_keys,
        };

        let builder = Pool::builder()
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(options));

        // An in-memory SQLite database lives and dies with its connection.
        let builder = if config.is_in_memory() {
            builder
                .max_size(1)
                .min_idle(Some(1))
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            builder.max_size(config.max_size)
        };

        let inner = builder
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner })
    }

    /// Run a blocking Diesel operation on a pooled connection.
    ///
    /// # Errors
    ///
    /// Checkout and task failures surface as their own variants; Diesel
    /// errors pass through as [`InteractError::Query`].
    pub async fn interact<T, F>(&self, op: F) -> Result<T, InteractError>
    where
        F: FnOnce(&mut SqliteConnection) -> diesel::QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|err| InteractError::Checkout {
                message: err.to_string(),
            })?;
            op(&mut conn).map_err(InteractError::Query)
        })
        .await
        .map_err(|err| InteractError::Task {
            message: err.to_string(),
        })?
    }

    /// Apply pending embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection is available and
    /// [`PoolError::Migration`] when a migration fails.
    pub fn run_migrations(&self) -> Result<(), PoolError> {
        let mut conn = self
            .inner
            .get()
            .map_err(|err| PoolError::checkout(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| PoolError::migration(err.to_string()))?;
        debug!(count = applied.len(), "applied pending migrations");
        Ok(())
    }
}
