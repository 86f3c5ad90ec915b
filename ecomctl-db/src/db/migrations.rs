//! Schema sync for the catalog tables
//!
//! Creates `category` and `items` when they do not exist yet. Existing
//! tables are left alone, so running this against a populated database is
//! a no-op.

use sqlx::PgPool;

use crate::error::{DbError, DbResult};

/// Run all catalog migrations
pub async fn run(pool: &PgPool) -> DbResult<()> {
    tracing::info!("Running catalog migrations...");

    step(
        pool,
        "create category",
        r#"
        CREATE TABLE IF NOT EXISTS category (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        )
        "#,
    )
    .await?;

    // Deleting a category orphans its items rather than removing them
    step(
        pool,
        "create items",
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            price NUMERIC(10, 2) NOT NULL,
            description TEXT NOT NULL,
            category_id INTEGER REFERENCES category(id)
                ON DELETE SET NULL ON UPDATE CASCADE
        )
        "#,
    )
    .await?;

    step(
        pool,
        "index items.category_id",
        "CREATE INDEX IF NOT EXISTS idx_items_category ON items(category_id)",
    )
    .await?;

    tracing::info!("Catalog migrations complete");
    Ok(())
}

async fn step(pool: &PgPool, name: &'static str, sql: &str) -> DbResult<()> {
    tracing::debug!(step = name, "applying migration step");
    sqlx::query(sql)
        .execute(pool)
        .await
        .map_err(|source| DbError::Migrate { step: name, source })?;
    Ok(())
}
