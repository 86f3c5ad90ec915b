//! Create the catalog tables if they are missing

use anyhow::{Context, Result};
use ecomctl_db::db::migrations;
use ecomctl_db::Database;

pub async fn run_migrate(db: &Database) -> Result<()> {
    migrations::run(db.pool())
        .await
        .context("Schema sync failed")
}
