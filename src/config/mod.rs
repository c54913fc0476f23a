//! Configuration module for the club backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;

/// Port used when neither `PORT` nor `CLUB_BIND_ADDR` is set.
const DEFAULT_PORT: u16 = 8000;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string (`sqlite:` URL, file path, or `memory://`)
    pub database_url: Option<String>,
    /// Logical database name documents are stored under
    pub database_name: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.variable, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL");
        let database_name = non_empty("DATABASE_NAME");

        let bind_addr = match non_empty("CLUB_BIND_ADDR") {
            Some(addr) => addr.parse().map_err(|e| ConfigError {
                variable: "CLUB_BIND_ADDR",
                message: format!("{} ({})", addr, e),
            })?,
            None => {
                let port = match non_empty("PORT") {
                    Some(port) => port.parse::<u16>().map_err(|e| ConfigError {
                        variable: "PORT",
                        message: format!("{} ({})", port, e),
                    })?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let log_level = non_empty("CLUB_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match non_empty("CLUB_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError {
                    variable: "CLUB_LOG_FORMAT",
                    message: format!("{} (expected text or json)", other),
                })
            }
        };

        Ok(Self {
            database_url,
            database_name,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
