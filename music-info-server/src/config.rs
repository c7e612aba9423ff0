//! Service configuration from environment variables
//!
//! Environment variables:
//!   PORT                  # HTTP port (default: 8080)
//!   BIND_HOST             # Listen address (default: 0.0.0.0)
//!   DB_HOST               # required
//!   DB_PORT               # required
//!   DB_USER               # required
//!   DB_PASSWORD           # required
//!   DB_NAME               # required
//!   DB_SSLMODE            # required (disable, prefer, require, verify-ca, verify-full)
//!   DB_MAX_CONNECTIONS    # pool size (default: 10)

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum pool connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Variables that must be set for the database connection
const REQUIRED_DB_VARS: [&str; 6] = [
    "DB_HOST",
    "DB_USER",
    "DB_NAME",
    "DB_PASSWORD",
    "DB_PORT",
    "DB_SSLMODE",
];

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Full service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

// Password stays out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Every missing database variable is
    /// reported at once rather than failing on the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_DB_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let port = match get("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let host: IpAddr = match get("BIND_HOST") {
            Some(raw) => parse_var("BIND_HOST", &raw)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_var("DB_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        // Checked above, present from here on.
        let required = |key: &str| get(key).unwrap_or_default();

        let database = DatabaseConfig {
            host: required("DB_HOST"),
            port: parse_var("DB_PORT", &required("DB_PORT"))?,
            user: required("DB_USER"),
            password: required("DB_PASSWORD"),
            name: required("DB_NAME"),
            ssl_mode: parse_var("DB_SSLMODE", &required("DB_SSLMODE"))?,
            max_connections,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            database,
        })
    }

    /// Replace the HTTP port, keeping the bind host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }
}

impl DatabaseConfig {
    /// Build sqlx connect options; sessions run in UTC.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
            .options([("TimeZone", "UTC")])
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        var,
        value: raw.to_owned(),
        reason: e.to_string(),
    })
}
