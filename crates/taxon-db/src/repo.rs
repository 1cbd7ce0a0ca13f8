//! Repository traits
//!
//! Define async repository interfaces for database operations. Components
//! that need storage take these by explicit injection; there is no global
//! repository singleton.

use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::{CategoryRow, UserRow};

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    ///
    /// Email uniqueness is enforced by the store; a duplicate surfaces as
    /// [`crate::DbError::UniqueViolation`].
    async fn insert(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

/// Category repository trait
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category and return its generated id
    async fn insert(&self, name: &str) -> DbResult<i64>;

    /// Find a category by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<CategoryRow>>;

    /// Find a category by name
    async fn find_by_name(&self, name: &str) -> DbResult<Option<CategoryRow>>;

    /// Rename a category, bumping its updated_at timestamp
    async fn update_name(&self, id: i64, name: &str) -> DbResult<()>;

    /// Delete a category
    ///
    /// Deleting a missing category is [`crate::DbError::NotFound`].
    async fn delete(&self, id: i64) -> DbResult<()>;

    /// List one page of categories plus the total category count
    async fn list(&self, page: i64, rows_per_page: i64) -> DbResult<(Vec<CategoryRow>, i64)>;
}
