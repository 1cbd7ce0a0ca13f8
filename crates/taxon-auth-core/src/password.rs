//! Password hashing using Argon2id
//!
//! Hashes are produced in PHC string format with a random per-password
//! salt; the cost parameters are embedded in the string, so verification
//! always runs with the parameters the hash was created with.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::AuthError;

/// Hash a password
///
/// Returns the hash in PHC string format. Fails only if the underlying
/// primitive cannot process the input.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Verify a password against a stored hash
///
/// A mismatch is `Ok(false)`, not an error; `Err` means the stored hash is
/// malformed or the primitive failed.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|e| AuthError::Hashing(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("secret1").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secret1", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hash = hash_password("secret1").unwrap();
        assert!(!verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn test_malformed_stored_hash_is_error() {
        let result = verify_password("secret1", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }

    #[test]
    fn test_salts_are_unique() {
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
        // Both still verify
        assert!(verify_password("secret1", &a).unwrap());
        assert!(verify_password("secret1", &b).unwrap());
    }

    #[test]
    fn test_empty_password_roundtrip() {
        let hash = hash_password("").unwrap();
        assert!(verify_password("", &hash).unwrap());
        assert!(!verify_password("x", &hash).unwrap());
    }
}
