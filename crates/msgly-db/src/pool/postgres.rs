//! PostgreSQL connection pool

use std::env;
use std::time::Duration;

use msgly_common::ConfigError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Pool sizing and timeouts
///
/// Connection URL and pool bounds come from the application config; the
/// timeouts have fixed defaults that callers may override.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Upper bound on waiting for a free connection, and so on every store call
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl PoolConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    /// Read `DATABASE_URL` and the optional `DATABASE_{MAX,MIN}_CONNECTIONS`
    ///
    /// # Errors
    /// Fails if the URL is unset or a pool bound is not a number
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let mut config = Self::new(url);

        if let Some(max) = bound_from_env("DATABASE_MAX_CONNECTIONS")? {
            config.max_connections = max;
        }
        if let Some(min) = bound_from_env("DATABASE_MIN_CONNECTIONS")? {
            config.min_connections = min;
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

fn bound_from_env(name: &'static str) -> Result<Option<u32>, ConfigError> {
    env::var(name).ok().map_or(Ok(None), |raw| {
        raw.parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw))
    })
}

impl From<&msgly_common::DatabaseConfig> for PoolConfig {
    fn from(config: &msgly_common::DatabaseConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            ..Self::new(config.url.clone())
        }
    }
}

/// Errors from building a pool out of the environment
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Open a connection pool
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Open a connection pool configured from the environment
pub async fn create_pool_from_env() -> Result<PgPool, PoolError> {
    let config = PoolConfig::from_env()?;
    Ok(create_pool(&config).await?)
}
