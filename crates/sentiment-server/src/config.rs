//! Server configuration read from environment variables.
//!
//! - `SENTIMENT_HOST`: bind IP address (default: "0.0.0.0")
//! - `SENTIMENT_PORT`: bind port (default: 5004)
//! - `SENTIMENT_BODY_LIMIT`: maximum request body size in bytes (default: 102400)
//!
//! Unset or blank variables fall back to their defaults.

use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::ServerError;

pub const HOST_VAR: &str = "SENTIMENT_HOST";
pub const PORT_VAR: &str = "SENTIMENT_PORT";
pub const BODY_LIMIT_VAR: &str = "SENTIMENT_BODY_LIMIT";

pub const DEFAULT_PORT: u16 = 5004;
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// Listener and request limits for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Requests with larger bodies are answered with 413.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        Ok(ServerConfig {
            host: parse_var(&lookup, HOST_VAR, defaults.host)?,
            port: parse_var(&lookup, PORT_VAR, defaults.port)?,
            body_limit: parse_var(&lookup, BODY_LIMIT_VAR, defaults.body_limit)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|err: T::Err| ServerError::Config {
                var,
                reason: err.to_string(),
                value: raw,
            })
        }
        _ => Ok(default),
    }
}
