//! Auth service - ties together credential hashing, token issuance, and
//! identity resolution against the user store.
//!
//! The user store is injected explicitly; nothing here reaches for a
//! global repository.

use std::sync::Arc;

use taxon_db::{CreateUser, UserRepository};
use taxon_types::{User, UserId};

use crate::{
    config::AuthConfig,
    password::{hash_password, verify_password},
    token::TokenService,
    AuthError,
};

/// Authentication service
///
/// Provides signup, login, and token-to-identity resolution.
pub struct AuthService<U: UserRepository> {
    config: AuthConfig,
    tokens: TokenService,
    users: Arc<U>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, users: Arc<U>) -> Self {
        Self {
            tokens: TokenService::new(&config.jwt_secret),
            users,
            config,
        }
    }

    /// The token service backing this auth service
    ///
    /// The access gate clones this so both ends verify against the same
    /// secret.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a new user
    ///
    /// Hashes the credential and persists the identity. The returned
    /// [`User`] never carries the hash. A duplicate email surfaces as
    /// [`AuthError::DuplicateEmail`].
    pub async fn signup(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let id = UserId::new();
        let password_hash = hash_password(password)?;

        let row = self
            .users
            .insert(CreateUser {
                id: id.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        Ok(row.into_user())
    }

    /// Authenticate a user and issue an access token
    ///
    /// Unknown email and wrong password yield the same error, so a caller
    /// cannot probe which addresses have accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let row = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &row.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens.issue(&row.id, self.config.token_ttl)
    }

    /// Resolve a token to the identity it asserts
    ///
    /// A missing subject and a store failure both collapse into
    /// [`AuthError::UnknownSubject`]; the caller cannot tell a deleted user
    /// from an invalid token. The hash is stripped before returning.
    pub async fn resolve(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.tokens.validate(token)?;

        let row = match self.users.find_by_id(&claims.sub).await {
            Ok(Some(row)) => row,
            Ok(None) => return Err(AuthError::UnknownSubject),
            Err(e) => {
                tracing::error!("User lookup failed during token resolution: {}", e);
                return Err(AuthError::UnknownSubject);
            }
        };

        Ok(row.into_user())
    }
}

impl<U: UserRepository> std::fmt::Debug for AuthService<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("token_ttl", &self.config.token_ttl)
            .finish_non_exhaustive()
    }
}
