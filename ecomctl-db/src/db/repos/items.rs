//! Item repository
//!
//! CRUD over `items`, plus the belongs-to lookup that resolves an item's
//! category with a LEFT JOIN in a single query.

use sqlx::{PgPool, Row};

use crate::error::DbResult;
use crate::models::{Category, Item, ItemChanges, ItemWithCategory, NewItem};

const ITEM_COLUMNS: &str = "id, name, price, description, category_id";

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every item, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        tracing::debug!("listing items");
        let rows = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Primary-key lookup.
    pub async fn find_by_id(&self, id: i32) -> DbResult<Option<Item>> {
        tracing::debug!(id, "finding item by id");
        let row = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Items that belong to one category, ordered by id.
    pub async fn list_by_category(&self, category_id: i32) -> DbResult<Vec<Item>> {
        tracing::debug!(category_id, "listing items by category");
        let rows = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE category_id = $1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Primary-key lookup with the owning category resolved.
    pub async fn find_with_category(&self, id: i32) -> DbResult<Option<ItemWithCategory>> {
        tracing::debug!(id, "finding item with category");
        let row = sqlx::query(
            r#"
            SELECT
                i.id,
                i.name,
                i.price,
                i.description,
                i.category_id,
                c.name AS category_name
            FROM items i
            LEFT JOIN category c ON c.id = i.category_id
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item = Item {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            description: row.try_get("description")?,
            category_id: row.try_get("category_id")?,
        };
        let category_name: Option<String> = row.try_get("category_name")?;
        let category = item
            .category_id
            .zip(category_name)
            .map(|(id, name)| Category { id, name });

        Ok(Some(ItemWithCategory { item, category }))
    }

    /// Insert an item and return it with its assigned id.
    ///
    /// A `category_id` that does not exist is rejected by the foreign key.
    pub async fn create(&self, new: NewItem) -> DbResult<Item> {
        let item = sqlx::query_as::<_, Item>(&format!(
            r#"
            INSERT INTO items (name, price, description, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(new.price)
        .bind(&new.description)
        .bind(new.category_id)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = item.id, name = %item.name, "item created");
        Ok(item)
    }

    /// Apply a partial update. Returns the number of rows changed (0 or 1).
    ///
    /// Columns whose change is `None` keep their current value.
    pub async fn update(&self, id: i32, changes: ItemChanges) -> DbResult<u64> {
        let (set_category, category_id) = match changes.category_id {
            Some(value) => (true, value),
            None => (false, None),
        };

        let affected = sqlx::query(
            r#"
            UPDATE items SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = COALESCE($4, description),
                category_id = CASE WHEN $5 THEN $6 ELSE category_id END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.price)
        .bind(changes.description)
        .bind(set_category)
        .bind(category_id)
        .execute(self.pool)
        .await?
        .rows_affected();

        tracing::info!(id, affected, "item updated");
        Ok(affected)
    }

    /// Delete one item. Returns the number of rows removed (0 or 1).
    pub async fn delete(&self, id: i32) -> DbResult<u64> {
        let affected = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        tracing::info!(id, affected, "item deleted");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::{pool, unique};
    use crate::db::repos::CategoryRepo;
    use crate::models::NewCategory;
    use rust_decimal::Decimal;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p ecomctl-db -- --ignored

    fn new_item(name: &str, category_id: Option<i32>) -> NewItem {
        NewItem {
            name: name.to_string(),
            price: Decimal::new(1999, 2),
            description: "test item".to_string(),
            category_id,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_by_id_returns_at_most_one_with_valid_category() {
        let pool = pool().await;
        let categories = CategoryRepo::new(&pool);
        let items = ItemRepo::new(&pool);

        let fruits = categories
            .create(NewCategory::new(unique("fruits")))
            .await
            .unwrap();
        let created = items
            .create(new_item(&unique("apple"), Some(fruits.id)))
            .await
            .unwrap();

        let found = items.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.price, Decimal::new(1999, 2));

        let category_id = found.category_id.unwrap();
        assert!(categories.find_by_id(category_id).await.unwrap().is_some());

        assert_eq!(items.find_by_id(i32::MAX).await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn price_is_rounded_to_two_places() {
        let pool = pool().await;
        let items = ItemRepo::new(&pool);
        let mut new = new_item(&unique("pear"), None);
        new.price = Decimal::new(12345, 3); // 12.345

        let created = items.create(new).await.unwrap();
        assert_eq!(created.price.scale(), 2);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_with_unknown_category_fails() {
        let pool = pool().await;
        let items = ItemRepo::new(&pool);
        let result = items.create(new_item(&unique("ghost"), Some(i32::MAX))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_with_category_resolves_belongs_to() {
        let pool = pool().await;
        let categories = CategoryRepo::new(&pool);
        let items = ItemRepo::new(&pool);

        let drinks = categories
            .create(NewCategory::new(unique("drinks")))
            .await
            .unwrap();
        let cola = items
            .create(new_item(&unique("cola"), Some(drinks.id)))
            .await
            .unwrap();
        let loose = items.create(new_item(&unique("loose"), None)).await.unwrap();

        let with = items.find_with_category(cola.id).await.unwrap().unwrap();
        assert_eq!(with.item, cola);
        assert_eq!(with.category, Some(drinks));

        let without = items.find_with_category(loose.id).await.unwrap().unwrap();
        assert_eq!(without.category, None);

        assert!(items.find_with_category(i32::MAX).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_keeps_other_columns() {
        let pool = pool().await;
        let items = ItemRepo::new(&pool);
        let created = items.create(new_item(&unique("kiwi"), None)).await.unwrap();

        let changes = ItemChanges {
            price: Some(Decimal::new(250, 2)),
            ..Default::default()
        };
        assert_eq!(items.update(created.id, changes).await.unwrap(), 1);

        let updated = items.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(updated.price, Decimal::new(250, 2));
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_can_set_and_clear_category() {
        let pool = pool().await;
        let categories = CategoryRepo::new(&pool);
        let items = ItemRepo::new(&pool);
        let snacks = categories
            .create(NewCategory::new(unique("snacks")))
            .await
            .unwrap();
        let chips = items.create(new_item(&unique("chips"), None)).await.unwrap();

        let set = ItemChanges {
            category_id: Some(Some(snacks.id)),
            ..Default::default()
        };
        items.update(chips.id, set).await.unwrap();
        assert_eq!(
            items.find_by_id(chips.id).await.unwrap().unwrap().category_id,
            Some(snacks.id)
        );

        let clear = ItemChanges {
            category_id: Some(None),
            ..Default::default()
        };
        items.update(chips.id, clear).await.unwrap();
        assert_eq!(
            items.find_by_id(chips.id).await.unwrap().unwrap().category_id,
            None
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_missing_are_noops() {
        let pool = pool().await;
        let items = ItemRepo::new(&pool);
        let changes = ItemChanges {
            name: Some("nothing".to_string()),
            ..Default::default()
        };
        assert_eq!(items.update(i32::MAX, changes).await.unwrap(), 0);
        assert_eq!(items.delete(i32::MAX).await.unwrap(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn deleting_category_orphans_items() {
        let pool = pool().await;
        let categories = CategoryRepo::new(&pool);
        let items = ItemRepo::new(&pool);
        let tea = categories
            .create(NewCategory::new(unique("tea")))
            .await
            .unwrap();
        let green = items
            .create(new_item(&unique("green"), Some(tea.id)))
            .await
            .unwrap();

        assert_eq!(items.list_by_category(tea.id).await.unwrap(), vec![green.clone()]);

        categories.delete(tea.id).await.unwrap();

        let orphan = items.find_by_id(green.id).await.unwrap().unwrap();
        assert_eq!(orphan.category_id, None);
        assert!(items.list_by_category(tea.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_item() {
        let pool = pool().await;
        let items = ItemRepo::new(&pool);
        let created = items.create(new_item(&unique("plum"), None)).await.unwrap();

        assert_eq!(items.delete(created.id).await.unwrap(), 1);
        assert!(items.find_by_id(created.id).await.unwrap().is_none());
        assert!(!items.list().await.unwrap().iter().any(|i| i.id == created.id));
    }
}
