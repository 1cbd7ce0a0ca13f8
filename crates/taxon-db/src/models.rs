//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User row from the database
///
/// The only type that carries the password hash; it stays inside the
/// service boundary and is stripped before anything reaches a client.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category row from the database
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Conversion implementations from row types to taxon-types domain types
impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> taxon_types::UserId {
        taxon_types::UserId(self.id.clone())
    }

    /// Convert to the public identity, dropping the password hash
    pub fn into_user(self) -> taxon_types::User {
        taxon_types::User {
            id: taxon_types::UserId(self.id),
            email: self.email,
        }
    }
}

impl CategoryRow {
    /// Convert to the public category type
    pub fn into_category(self) -> taxon_types::Category {
        taxon_types::Category {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
