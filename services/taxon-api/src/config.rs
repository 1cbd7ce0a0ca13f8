//! Configuration for the taxon API service.

use std::time::Duration;

use taxon_auth_core::AuthConfig;

/// API service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,

    /// Database URL
    pub database_url: String,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// Request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; their absence is a
    /// startup failure, not something discovered per request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET must not be empty"));
        }

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        // Token lifetime (default 48 hours)
        let token_ttl_hours: u64 = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "48".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_TTL_HOURS"))?;

        // Request timeout (default 30 seconds)
        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        let auth = AuthConfig::new(jwt_secret)
            .with_token_ttl(Duration::from_secs(token_ttl_hours * 3600));

        Ok(Self {
            port,
            database_url,
            auth,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
