//! Configuration management for the FlowOps site backend.
//!
//! Values come from environment variables. [`Config::load`] reads a `.env`
//! file into the environment first; [`Config::from_env`] only looks at the
//! process environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the site has always listened on.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the FlowOps site backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (default: 5000)
    pub port: u16,

    /// Address to bind (default: 0.0.0.0)
    pub bind_address: IpAddr,

    /// Webhook that receives accepted leads. When unset, leads are only logged.
    pub lead_webhook_url: Option<String>,

    /// Outbound HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load a `.env` file if one is present, then read the environment.
    pub fn load() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `PORT`: Listen port (default: 5000)
    /// - `BIND_ADDRESS`: Listen address (default: 0.0.0.0)
    /// - `LEAD_WEBHOOK_URL`: http(s) URL that receives accepted leads
    /// - `REQUEST_TIMEOUT`: Outbound HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let port = Self::parse_env_u16("PORT", DEFAULT_PORT)?;
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PORT".to_string(),
                reason: "Must be between 1 and 65535".to_string(),
            });
        }

        let bind_address = match env::var("BIND_ADDRESS") {
            Ok(val) => val.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDRESS".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let lead_webhook_url = match env::var("LEAD_WEBHOOK_URL") {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidValue {
                        var: "LEAD_WEBHOOK_URL".to_string(),
                        reason: "Must start with http:// or https://".to_string(),
                    });
                }
                Some(url)
            }
            Err(_) => None,
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            port,
            bind_address,
            lead_webhook_url,
            request_timeout,
            log_level,
        })
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be between 1 and 65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            lead_webhook_url: None,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
