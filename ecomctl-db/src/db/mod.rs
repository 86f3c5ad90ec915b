//! Database layer - connection handle, schema sync and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed handle, passed by reference, closed on exit
//! - Lookups by key return `Option`, mutations return affected row counts
//! - Referential integrity is left to PostgreSQL constraints
//! - Belongs-to resolution uses a JOIN, not a second query

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::Database;
pub use repos::*;
