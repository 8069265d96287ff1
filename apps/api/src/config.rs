use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

/// Errors while reading service configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Service settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Prefix for every prompt and model route
    pub api_prefix: String,
    pub log_level: Level,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_PREFIX: &'static str = "/api/v1";

    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    ///
    /// Recognised keys: `API_HOST`, `API_PORT`, `API_PREFIX`, `LOG_LEVEL`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or("API_HOST", lookup("API_HOST"), Self::DEFAULT_HOST)?;
        let port = match lookup("API_PORT") {
            Some(value) => parse("API_PORT", &value)?,
            None => Self::DEFAULT_PORT,
        };
        let api_prefix = lookup("API_PREFIX")
            .map(|prefix| prefix.trim_end_matches('/').to_string())
            .filter(|prefix| prefix.starts_with('/'))
            .unwrap_or_else(|| Self::DEFAULT_PREFIX.to_string());
        let log_level = parse_or("LOG_LEVEL", lookup("LOG_LEVEL"), "info")?;

        Ok(Self {
            host,
            port,
            api_prefix,
            log_level,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: Self::DEFAULT_PORT,
            api_prefix: Self::DEFAULT_PREFIX.to_string(),
            log_level: Level::INFO,
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    parse(key, value.as_deref().unwrap_or(default))
}
