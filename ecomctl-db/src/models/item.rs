//! Item entity - table `items`
//!
//! Each item belongs to at most one category through `category_id`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Category;

/// Item record from database
///
/// `price` is `NUMERIC(10,2)` and serializes as a string (`"1.50"`).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category_id: Option<i32>,
}

/// Item with its category resolved (`None` when unset)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemWithCategory {
    #[serde(flatten)]
    pub item: Item,
    pub category: Option<Category>,
}

/// Input for inserting an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category_id: Option<i32>,
}

/// Partial update for an item; `None` leaves the column unchanged.
///
/// `category_id` is doubly optional: `Some(None)` clears the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category_id: Option<Option<i32>>,
}
