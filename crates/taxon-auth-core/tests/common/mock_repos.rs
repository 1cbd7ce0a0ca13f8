//! Mock repositories for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use taxon_db::{CreateUser, DbError, DbResult, UserRepository, UserRow};

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<String, UserRow>>,
    by_email: Arc<DashMap<String, String>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user directly, simulating deletion behind the service's back
    pub fn remove_user(&self, id: &str) {
        if let Some((_, user)) = self.users.remove(id) {
            self.by_email.remove(&user.email);
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn insert(&self, user: CreateUser) -> DbResult<UserRow> {
        if self.by_email.contains_key(&user.email) {
            return Err(DbError::UniqueViolation("users_email_key".to_string()));
        }

        let row = UserRow {
            id: user.id.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_email.insert(user.email, user.id.clone());
        self.users.insert(user.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }
}

/// User repository that fails every operation, for store-outage tests
#[derive(Default, Clone)]
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn insert(&self, _user: CreateUser) -> DbResult<UserRow> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn find_by_id(&self, _id: &str) -> DbResult<Option<UserRow>> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn find_by_email(&self, _email: &str) -> DbResult<Option<UserRow>> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }
}
