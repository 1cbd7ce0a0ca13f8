//! PostgreSQL repository implementations

mod category;
mod user;

pub use category::PgCategoryRepository;
pub use user::PgUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub categories: PgCategoryRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            categories: PgCategoryRepository::new(pool),
        }
    }
}
