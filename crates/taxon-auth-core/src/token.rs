//! Bearer-token issuance and validation
//!
//! Tokens are compact JWTs signed HS256 with the process-wide symmetric
//! secret. Claims decode directly into [`AccessClaims`]; there is no
//! generic claims map to cast out of.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::AuthError;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user id the token asserts ownership of
    pub sub: String,
    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// Check whether the token has expired
    ///
    /// The expiry instant itself counts as expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Issues and validates signed access tokens
///
/// Stateless and reentrant: both keys are derived once from the shared
/// secret and never mutated, so a single instance (or clones of it) can
/// serve any number of concurrent requests.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a new token service from the shared signing secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; a token is never accepted past its exp claim.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token for the given subject, valid for `ttl` from now
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, AuthError> {
        let claims = AccessClaims {
            sub: subject.to_string(),
            exp: Utc::now().timestamp() + ttl.as_secs() as i64,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AuthError::Internal("failed to sign token".to_string())
        })
    }

    /// Validate a token string and return its claims
    pub fn validate(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::BadSignature,
                    _ => AuthError::MalformedToken,
                }
            })?;

        let claims = token_data.claims;

        // jsonwebtoken treats exp == now as still valid; the contract here
        // is that a token fails from its expiry instant onward.
        if claims.is_expired() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(48 * 3600);

    fn service() -> TokenService {
        TokenService::new("test-signing-secret")
    }

    #[test]
    fn test_issue_validate_roundtrip() {
        let tokens = service();
        let token = tokens.issue("01J9ZJ4WQJ3F9Z2M5T8R6XWVKD", TTL).unwrap();

        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.sub, "01J9ZJ4WQJ3F9Z2M5T8R6XWVKD");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_zero_ttl_is_already_expired() {
        let tokens = service();
        let token = tokens.issue("user", Duration::ZERO).unwrap();

        let result = tokens.validate(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service();
        // exp one hour in the past
        let claims = AccessClaims {
            sub: "user".to_string(),
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-signing-secret"),
        )
        .unwrap();

        let result = tokens.validate(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let tokens = service();
        let token = tokens.issue("user", TTL).unwrap();

        // Flip the first character of the signature segment to a different
        // base64url character
        let dot = token.rfind('.').unwrap();
        let mut bytes = token.into_bytes();
        bytes[dot + 1] = if bytes[dot + 1] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        let result = tokens.validate(&tampered);
        assert!(matches!(result, Err(AuthError::BadSignature)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = TokenService::new("secret-one");
        let verifier = TokenService::new("secret-two");

        let token = signer.issue("user", TTL).unwrap();
        let result = verifier.validate(&token);
        assert!(matches!(result, Err(AuthError::BadSignature)));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let tokens = service();
        for garbage in ["", "not-a-token", "a.b", "a.b.c.d", "....."] {
            let result = tokens.validate(garbage);
            assert!(
                matches!(result, Err(AuthError::MalformedToken)),
                "expected malformed for {garbage:?}"
            );
        }
    }

    #[test]
    fn test_truncated_token_rejected() {
        let tokens = service();
        let token = tokens.issue("user", TTL).unwrap();
        let truncated = &token[..token.len() - 1];

        assert!(tokens.validate(truncated).is_err());
    }
}
