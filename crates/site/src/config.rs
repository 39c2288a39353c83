//! Site configuration loaded from environment variables.
//!
//! The demo is self-contained, so every variable is optional and the site
//! boots with an empty environment.
//!
//! # Environment Variables
//!
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 4000)
//! - `SITE_STATUS_MESSAGE_SECS` - Seconds before transient status messages
//!   auto-clear in the browser (default: 4)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Seconds before transient status messages auto-clear (cosmetic)
    pub status_message_secs: u32,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "4000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let status_message_secs = get_env_or_default("SITE_STATUS_MESSAGE_SECS", "4")
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SITE_STATUS_MESSAGE_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            status_message_secs,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 4000,
            status_message_secs: 4,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 4000);
        assert_eq!(config.status_message_secs, 4);
    }

    #[test]
    fn test_socket_addr() {
        let config = SiteConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            status_message_secs: 4,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("SWIFTPARCEL_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
