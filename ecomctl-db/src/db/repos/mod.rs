//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues SQL for one table:
//! - Lookups by key return `Option` ("not found" is not an error)
//! - Updates and deletes return the number of affected rows
//! - Lists are ordered by primary key

pub mod categories;
pub mod items;

pub use categories::CategoryRepo;
pub use items::ItemRepo;
