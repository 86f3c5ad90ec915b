//! ecomctl-db: PostgreSQL access for the ecommerce catalog
//!
//! Owns the connection handle, the `category` and `items` entity
//! declarations, schema sync, and one repository per table.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::{ConnectionOverrides, DbConfig};
pub use db::{CategoryRepo, Database, ItemRepo};
pub use error::{DbError, DbResult};
pub use models::{Category, Item, ItemChanges, ItemWithCategory, NewCategory, NewItem};
