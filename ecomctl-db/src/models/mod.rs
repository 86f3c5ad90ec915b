//! Entity declarations for the `category` and `items` tables
//!
//! Row types derive `FromRow` for sqlx and `Serialize` so commands can print
//! them as JSON keyed by column name.

pub mod category;
pub mod item;

pub use category::{Category, NewCategory};
pub use item::{Item, ItemChanges, ItemWithCategory, NewItem};
