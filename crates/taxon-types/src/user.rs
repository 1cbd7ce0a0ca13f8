//! User identity types

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique user identifier
///
/// Backed by a ULID: collision-resistant and lexicographically sortable by
/// creation time, so ids are safe to generate on any node and never expose
/// an enumerable sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Generate a new random user ID
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// View the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A resolved user identity.
///
/// Deliberately has no field for the stored credential hash: anything built
/// from this type cannot leak it into a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_is_ulid_shaped() {
        let id = UserId::new();
        assert_eq!(id.as_str().len(), 26);
    }

    #[test]
    fn test_user_id_sorts_by_creation() {
        let a = UserId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = UserId::new();
        assert!(a.as_str() < b.as_str());
    }

    #[test]
    fn test_user_serializes_without_credential_fields() {
        let user = User {
            id: UserId::new(),
            email: "a@x.com".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }
}
