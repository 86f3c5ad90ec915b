//! Command implementations for ecomctl CLI

pub mod categories;
pub mod items;
pub mod migrate;
pub mod ping;

// Re-export main dispatcher functions for flat access from main.rs
pub use categories::run_categories;
pub use items::run_items;
pub use migrate::run_migrate;
pub use ping::run_ping;
