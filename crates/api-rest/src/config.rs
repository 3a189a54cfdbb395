//! REST runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the server. Request
//! handling never reads environment variables.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Default bind address when `RISK_REST_ADDR` is not set.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Default anonymous-session lifetime when `SESSION_TTL_HOURS` is not set.
pub const DEFAULT_SESSION_TTL_HOURS: u32 = 24;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("bind address cannot be empty")]
    EmptyAddr,
    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
    #[error("SESSION_TTL_HOURS must be a positive integer, got '{0}'")]
    InvalidSessionTtl(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// REST configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RestConfig {
    addr: String,
    allowed_origins: Vec<HeaderValue>,
    session_ttl_hours: u32,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_REST_ADDR.into(),
            allowed_origins: Vec::new(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}

impl RestConfig {
    /// Create a new `RestConfig`.
    ///
    /// An empty `allowed_origins` list means CORS is permissive.
    pub fn new(
        addr: String,
        allowed_origins: Vec<HeaderValue>,
        session_ttl_hours: u32,
    ) -> ConfigResult<Self> {
        if addr.trim().is_empty() {
            return Err(ConfigError::EmptyAddr);
        }
        if session_ttl_hours == 0 {
            return Err(ConfigError::InvalidSessionTtl("0".into()));
        }

        Ok(Self {
            addr,
            allowed_origins,
            session_ttl_hours,
        })
    }

    /// Build a config from raw environment values, applying defaults for unset ones.
    ///
    /// `origins` is a comma-separated list; blank entries are ignored.
    pub fn from_env_values(
        addr: Option<String>,
        origins: Option<String>,
        session_ttl_hours: Option<String>,
    ) -> ConfigResult<Self> {
        let addr = addr.unwrap_or_else(|| DEFAULT_REST_ADDR.into());

        let allowed_origins = origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_owned()))
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        let session_ttl_hours = match session_ttl_hours {
            None => DEFAULT_SESSION_TTL_HOURS,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidSessionTtl(raw.clone()))?,
        };

        Self::new(addr, allowed_origins, session_ttl_hours)
    }

    /// Read `RISK_REST_ADDR`, `ALLOWED_ORIGINS` and `SESSION_TTL_HOURS` from the environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_values(
            std::env::var("RISK_REST_ADDR").ok(),
            std::env::var("ALLOWED_ORIGINS").ok(),
            std::env::var("SESSION_TTL_HOURS").ok(),
        )
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn allowed_origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }

    pub fn session_ttl_hours(&self) -> u32 {
        self.session_ttl_hours
    }

    /// CORS layer for the configured origins.
    pub fn cors_layer(&self) -> CorsLayer {
        if self.allowed_origins.is_empty() {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(self.allowed_origins.clone()))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
