//! Environment-driven configuration.

use std::net::SocketAddr;

use thiserror::Error;

use oficina_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// HS256 secret. When absent, signatures are assumed verified upstream.
    pub jwt_secret: Option<String>,
    pub log_format: LogFormat,
}

impl core::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Do not print the secret
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "***"))
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            jwt_secret: None,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Read `OFICINA_BIND_ADDR`, `OFICINA_JWT_SECRET` and `LOG_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("OFICINA_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid("OFICINA_BIND_ADDR"))?;

        let jwt_secret = lookup("OFICINA_JWT_SECRET").filter(|s| !s.trim().is_empty());

        let log_format = lookup("LOG_FORMAT")
            .map(|v| LogFormat::from_env_value(&v))
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            jwt_secret,
            log_format,
        })
    }
}
