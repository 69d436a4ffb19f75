//! SurrealDB connection management.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

/// Configuration for connecting to SurrealDB.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`).
    pub url: String,
    /// SurrealDB namespace.
    pub namespace: String,
    /// SurrealDB database name.
    pub database: String,
    /// Root username for authentication.
    pub username: String,
    /// Root password for authentication.
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "fundsight".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// Build a configuration from `FUNDSIGHT_DB_*` environment
    /// variables, falling back to defaults for any that are unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("FUNDSIGHT_DB_URL").unwrap_or(defaults.url),
            namespace: std::env::var("FUNDSIGHT_DB_NS").unwrap_or(defaults.namespace),
            database: std::env::var("FUNDSIGHT_DB_NAME").unwrap_or(defaults.database),
            username: std::env::var("FUNDSIGHT_DB_USER").unwrap_or(defaults.username),
            password: std::env::var("FUNDSIGHT_DB_PASS").unwrap_or(defaults.password),
        }
    }
}

/// Manages a connection to SurrealDB.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Connect to SurrealDB using the provided configuration.
    ///
    /// Authenticates as root, selects the configured namespace and
    /// database, and returns a ready-to-use manager.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!("Successfully connected to SurrealDB");

        Ok(Self { db })
    }

    /// Returns a reference to the underlying SurrealDB client.
    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_instance() {
        let config = DbConfig::default();
        assert_eq!(config.url, "127.0.0.1:8000");
        assert_eq!(config.namespace, "fundsight");
        assert_eq!(config.database, "main");
    }

    #[test]
    fn from_env_overrides_only_set_variables() {
        unsafe {
            std::env::set_var("FUNDSIGHT_DB_URL", "db.internal:8000");
            std::env::set_var("FUNDSIGHT_DB_NS", "staging");
        }

        let config = DbConfig::from_env();
        assert_eq!(config.url, "db.internal:8000");
        assert_eq!(config.namespace, "staging");
        // Unset variables fall back to defaults.
        assert_eq!(config.database, "main");
        assert_eq!(config.username, "root");

        unsafe {
            std::env::remove_var("FUNDSIGHT_DB_URL");
            std::env::remove_var("FUNDSIGHT_DB_NS");
        }
    }
}
