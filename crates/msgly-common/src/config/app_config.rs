//! Application configuration structs
//!
//! Loads configuration from environment variables (`from_env`) or from an
//! optional config file layered under `MSGLY__*` environment variables (`load`).

use serde::Deserialize;
use std::env;

use crate::auth::MAX_TOKEN_EXPIRY;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    pub jwt: JwtConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Argon2 iteration count; higher is slower and stronger
    #[serde(default = "default_hash_work_factor")]
    pub hash_work_factor: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            hash_work_factor: default_hash_work_factor(),
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds; tokens never expire when unset
    #[serde(default)]
    pub token_expiry: Option<i64>,
}

// Default value functions
fn default_app_name() -> String {
    "msgly".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_hash_work_factor() -> u32 {
    2 // Argon2 default iteration count
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            security: SecurityConfig {
                hash_work_factor: parse_var("HASH_WORK_FACTOR")?
                    .unwrap_or_else(default_hash_work_factor),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                token_expiry: parse_var("JWT_TOKEN_EXPIRY")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional file, overridden by `MSGLY__SECTION__KEY` variables
    ///
    /// # Errors
    /// Returns an error if the sources cannot be read or deserialized
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config: Self = ::config::Config::builder()
            .add_source(::config::File::with_name(path).required(false))
            .add_source(
                ::config::Environment::with_prefix("MSGLY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.hash_work_factor == 0 {
            return Err(ConfigError::InvalidValue(
                "HASH_WORK_FACTOR",
                "must be at least 1".to_string(),
            ));
        }

        if self.jwt.secret.is_empty() {
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET",
                "must not be empty".to_string(),
            ));
        }

        if let Some(expiry) = self.jwt.token_expiry {
            if !(1..=MAX_TOKEN_EXPIRY).contains(&expiry) {
                return Err(ConfigError::InvalidValue(
                    "JWT_TOKEN_EXPIRY",
                    format!("{expiry} is outside 1..={MAX_TOKEN_EXPIRY} seconds"),
                ));
            }
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::InvalidValue(
                "DATABASE_MIN_CONNECTIONS",
                format!(
                    "{} exceeds max connections {}",
                    self.database.min_connections, self.database.max_connections
                ),
            ));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to load configuration: {0}")]
    Load(String),
}
