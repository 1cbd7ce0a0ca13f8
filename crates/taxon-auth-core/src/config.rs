//! Configuration types for the auth service

use std::time::Duration;

/// Auth service configuration
///
/// The signing secret is read once at startup and never rotated at
/// runtime; every component that signs or verifies tokens derives its
/// keys from this value.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for token signing and verification
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Default token lifetime: 48 hours
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(48 * 60 * 60);

    /// Create a new auth config with the default token lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        }
    }

    /// Set the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}
