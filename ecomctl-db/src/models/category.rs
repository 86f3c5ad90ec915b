//! Category entity - table `category`

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Input for inserting a category; the id is assigned by the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
