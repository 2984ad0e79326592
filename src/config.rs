use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean (true/false), got '{value}'")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key} is not valid: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("DATABASE_URI must be set unless TESTING is enabled")]
    MissingDatabaseUri,
}

/// Process configuration read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bypasses production hardening: HTTPS forcing defaults to off and an
    /// in-memory store is allowed when no database is configured.
    pub testing: bool,
    pub debug: bool,
    pub database_uri: Option<String>,
    pub force_https: bool,
    pub db_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value: raw.to_string() }),
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw.to_string() })
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &'static str, default: bool| match lookup(key) {
            Some(raw) => parse_bool(key, &raw),
            None => Ok(default),
        };

        let testing = flag("TESTING", false)?;
        let debug = flag("DEBUG", false)?;
        let force_https = flag("FORCE_HTTPS", !testing)?;
        let database_uri = lookup("DATABASE_URI")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|uri| !uri.trim().is_empty());
        if database_uri.is_none() && !testing {
            return Err(ConfigError::MissingDatabaseUri);
        }

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_value("DB_MAX_CONNECTIONS", &raw)?,
            None => 10,
        };
        let host = match lookup("HOST") {
            Some(raw) => parse_value("HOST", &raw)?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port = match lookup("PORT") {
            Some(raw) => parse_value("PORT", &raw)?,
            None => 8080,
        };

        Ok(Self {
            testing,
            debug,
            database_uri,
            force_https,
            db_max_connections,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log level used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
