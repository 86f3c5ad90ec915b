//! Category repository
//!
//! Plain CRUD over `category`. Nothing is validated before mutating;
//! constraint violations come back as `DbError::Sqlx`.

use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{Category, NewCategory};

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every category, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        tracing::debug!("listing categories");
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// All categories whose name matches exactly. Names are not unique,
    /// so this can return several rows.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Vec<Category>> {
        tracing::debug!(name, "finding categories by name");
        let rows = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM category WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Primary-key lookup.
    pub async fn find_by_id(&self, id: i32) -> DbResult<Option<Category>> {
        tracing::debug!(id, "finding category by id");
        let row = sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a category and return it with its assigned id.
    pub async fn create(&self, new: NewCategory) -> DbResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO category (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&new.name)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Rename one category. Returns the number of rows changed (0 or 1).
    pub async fn update_name(&self, id: i32, name: &str) -> DbResult<u64> {
        let affected = sqlx::query("UPDATE category SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(self.pool)
            .await?
            .rows_affected();

        tracing::info!(id, affected, "category renamed");
        Ok(affected)
    }

    /// Delete one category. Returns the number of rows removed (0 or 1).
    ///
    /// Items pointing at it keep existing with `category_id` set to NULL.
    pub async fn delete(&self, id: i32) -> DbResult<u64> {
        let affected = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        tracing::info!(id, affected, "category deleted");
        Ok(affected)
    }
}
