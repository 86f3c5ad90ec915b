//! Connectivity check

use anyhow::Result;
use ecomctl_db::Database;

use crate::output::Output;

/// Print whether the database accepts our settings. Never errors on a
/// failed connection; the caller turns `false` into a non-zero exit.
pub async fn run_ping(db: &Database, out: Output) -> Result<bool> {
    let connected = db.test_connection().await;
    out.print(&connected)?;
    Ok(connected)
}
