//! Application settings and server configuration.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DbPool;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DATABASE_URL: &str = ":memory:";

/// Application settings loaded from the environment via OrthoConfig.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKMARKET")]
pub struct AppSettings {
    /// Socket address the server listens on.
    pub bind_addr: Option<String>,
    /// SQLite database URL; defaults to a process-private in-memory store.
    pub database_url: Option<String>,
    /// Enforce the declared foreign keys on every connection.
    ///
    /// Off by default so the service accepts dangling references the way the
    /// schema's consumers historically relied on.
    #[ortho_config(default = false)]
    pub enforce_foreign_keys: bool,
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured database URL, falling back to in-memory.
    #[must_use]
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }
}

/// Pre-built configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, pool: DbPool) -> Self {
        Self { bind_addr, pool }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for application settings parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("taskmarket")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TASKMARKET_BIND_ADDR", None::<String>),
            ("TASKMARKET_DATABASE_URL", None::<String>),
            ("TASKMARKET_ENFORCE_FOREIGN_KEYS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert!(!settings.enforce_foreign_keys);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TASKMARKET_BIND_ADDR", Some("0.0.0.0:9000".to_owned())),
            (
                "TASKMARKET_DATABASE_URL",
                Some("/var/lib/taskmarket/data.db".to_owned()),
            ),
            ("TASKMARKET_ENFORCE_FOREIGN_KEYS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:9000");
        assert_eq!(settings.database_url(), "/var/lib/taskmarket/data.db");
        assert!(settings.enforce_foreign_keys);
    }
}
