//! Runtime configuration for the sensorhub server.
//!
//! Values come from environment variables (optionally seeded from a `.env`
//! file by the binary). Parsing goes through [`AppConfig::from_lookup`] so it
//! can be exercised without touching the process environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Listen host variable.
pub const HOST_VAR: &str = "SENSORHUB_HOST";
/// Listen port variable.
pub const PORT_VAR: &str = "SENSORHUB_PORT";
/// Storage backend variable.
pub const STORE_VAR: &str = "SENSORHUB_STORE";
/// PostgreSQL connection URL variable.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Pool size variable.
pub const MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";
/// Join-announcement toggle variable.
pub const ANNOUNCE_VAR: &str = "SENSORHUB_ANNOUNCE_CONNECTIONS";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },

    /// A variable required by the selected backend is unset.
    #[error("{name} must be set when SENSORHUB_STORE={backend}")]
    Missing {
        /// Variable name.
        name: &'static str,
        /// Backend that requires it.
        backend: StoreBackend,
    },
}

/// Where readings are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// PostgreSQL through the diesel adapter.
    #[default]
    Postgres,
    /// Process-local storage; readings are lost on exit.
    Memory,
}

impl StoreBackend {
    /// Returns the configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the socket server binds to.
    pub host: IpAddr,
    /// Port the socket server binds to.
    pub port: u16,
    /// Broadcast a notice to every client when one joins.
    pub announce_connections: bool,
}

impl ServerConfig {
    /// Returns the listen address.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// PostgreSQL settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Connection URL.
    pub url: String,
    /// Maximum pooled connections.
    pub max_connections: u32,
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Selected persistence backend.
    pub store: StoreBackend,
    /// Database settings; present when `store` is [`StoreBackend::Postgres`].
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is malformed or a required
    /// variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is malformed or a required
    /// variable is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, HOST_VAR, IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(&lookup, PORT_VAR, DEFAULT_PORT)?;
        let announce_connections = parse_flag(&lookup, ANNOUNCE_VAR, true)?;
        let store = parse_or(&lookup, STORE_VAR, StoreBackend::default())?;

        let database = match store {
            StoreBackend::Memory => None,
            StoreBackend::Postgres => {
                let url = lookup(DATABASE_URL_VAR)
                    .filter(|value| !value.trim().is_empty())
                    .ok_or(ConfigError::Missing {
                        name: DATABASE_URL_VAR,
                        backend: store,
                    })?;
                let max_connections =
                    parse_or(&lookup, MAX_CONNECTIONS_VAR, DEFAULT_MAX_CONNECTIONS)?;
                if max_connections == 0 {
                    return Err(ConfigError::InvalidValue {
                        name: MAX_CONNECTIONS_VAR,
                        value: max_connections.to_string(),
                    });
                }
                Some(DatabaseConfig {
                    url,
                    max_connections,
                })
            }
        };

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                announce_connections,
            },
            store,
            database,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

fn parse_flag<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name, value }),
    }
}
