/**
 * Server Configuration
 *
 * This module loads and validates the server configuration from the
 * environment. It is read once at startup, after `.env` has been applied.
 *
 * # Variables
 *
 * - `DATABASE_URL` - SQLite URL (default `sqlite://cms.db?mode=rwc`)
 * - `JWT_SECRET` - token signing secret (required)
 * - `SERVER_PORT` - listen port (default 8080)
 * - `DB_TIMEOUT_SECS` - per-operation database deadline (default 5)
 * - `BCRYPT_COST` - password hash cost (default `bcrypt::DEFAULT_COST`)
 *
 * Any invalid value aborts startup with a `ConfigError`.
 */

use std::time::Duration;

use thiserror::Error;

use crate::backend::auth::sessions::SigningSecret;
use crate::backend::server::database::DEFAULT_OP_TIMEOUT;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cms.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: SigningSecret,
    pub port: u16,
    pub db_timeout: Duration,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through a variable lookup function
    ///
    /// # Example
    ///
    /// ```rust
    /// use cms_server::backend::server::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_lookup(|name| match name {
    ///     "JWT_SECRET" => Some("secret".to_string()),
    ///     "SERVER_PORT" => Some("3000".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.port, 3000);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse("SERVER_PORT", &port)?);
        }
        if let Some(secs) = lookup("DB_TIMEOUT_SECS") {
            builder = builder.db_timeout(Duration::from_secs(parse("DB_TIMEOUT_SECS", &secs)?));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    db_timeout: Option<Duration>,
    bcrypt_cost: Option<u32>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn db_timeout(mut self, timeout: Duration) -> Self {
        self.db_timeout = Some(timeout);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let secret = self
            .jwt_secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let db_timeout = self.db_timeout.unwrap_or(DEFAULT_OP_TIMEOUT);
        if db_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "DB_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: SigningSecret::new(secret),
            port: self.port.unwrap_or(DEFAULT_PORT),
            db_timeout,
            bcrypt_cost,
        })
    }
}
