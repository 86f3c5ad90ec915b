//! Connection handle for the ecommerce database
//!
//! Wraps a small sqlx `PgPool`. The pool connects lazily, so building a
//! `Database` never touches the network; the first query (or the
//! connectivity check) does.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;
use crate::db::repos::{CategoryRepo, ItemRepo};
use crate::error::DbResult;

/// Process-wide database handle
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build a handle from connection settings.
    ///
    /// Must be called from within a tokio runtime. Fails only when the
    /// settings themselves are invalid (e.g. a malformed URL).
    pub fn connect(config: &DbConfig) -> DbResult<Self> {
        let options = config.connect_options()?;

        tracing::debug!(target_db = %config.target(), "creating connection pool");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn categories(&self) -> CategoryRepo<'_> {
        CategoryRepo::new(&self.pool)
    }

    pub fn items(&self) -> ItemRepo<'_> {
        ItemRepo::new(&self.pool)
    }

    /// Check that the database accepts our credentials.
    ///
    /// Never fails: any error is logged and reported as `false`.
    pub async fn test_connection(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => {
                tracing::info!("we are connected!");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "sorry wrong db :(");
                false
            }
        }
    }

    /// Close all connections. Further queries on this handle fail.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("connection pool closed");
    }
}
