//! PostgreSQL category repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::CategoryRow;
use crate::repo::CategoryRepository;

/// PostgreSQL category repository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new category repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn insert(&self, name: &str) -> DbResult<i64> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO categories (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> DbResult<Option<CategoryRow>> {
        let category = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_name(&self, name: &str) -> DbResult<Option<CategoryRow>> {
        let category = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn update_name(&self, id: i64, name: &str) -> DbResult<()> {
        sqlx::query("UPDATE categories SET name = $1, updated_at = now() WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }

    async fn list(&self, page: i64, rows_per_page: i64) -> DbResult<(Vec<CategoryRow>, i64)> {
        let categories = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(rows_per_page)
        .bind((page - 1) * rows_per_page)
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok((categories, total))
    }
}
