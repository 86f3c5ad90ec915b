//! Item commands - list, get, create, update, delete
//!
//! ```bash
//! ecomctl items create --name apple --price 1.50 --description red --category-id 1
//! ecomctl items get 3 --with-category
//! ecomctl items update 3 --clear-category
//! ```

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use ecomctl_db::{Database, ItemChanges, NewItem};
use rust_decimal::Decimal;
use tracing::warn;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct ItemsArgs {
    #[command(subcommand)]
    pub command: ItemCommands,
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List all items
    List,
    /// Get one item by id (prints null when missing)
    Get(GetArgs),
    /// List items belonging to a category
    ByCategory {
        /// Category id
        category_id: i32,
    },
    /// Create an item, then list all
    Create(CreateArgs),
    /// Change some columns of an item, then list all
    Update(UpdateArgs),
    /// Delete an item, then list all
    Delete {
        /// Item id
        id: i32,
    },
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Item id
    pub id: i32,

    /// Include the item's category
    #[arg(long)]
    pub with_category: bool,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Price with up to two decimal places (e.g. 1.50)
    #[arg(long)]
    pub price: Decimal,

    /// Item description
    #[arg(long)]
    pub description: String,

    /// Owning category id
    #[arg(long)]
    pub category_id: Option<i32>,
}

#[derive(Parser, Debug)]
#[command(group(
    ArgGroup::new("changes")
        .required(true)
        .multiple(true)
        .args(["name", "price", "description", "category_id", "clear_category"]),
))]
pub struct UpdateArgs {
    /// Item id
    pub id: i32,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Move the item to another category
    #[arg(long, conflicts_with = "clear_category")]
    pub category_id: Option<i32>,

    /// Detach the item from its category
    #[arg(long)]
    pub clear_category: bool,
}

impl UpdateArgs {
    fn changes(&self) -> ItemChanges {
        let category_id = if self.clear_category {
            Some(None)
        } else {
            self.category_id.map(Some)
        };

        ItemChanges {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            category_id,
        }
    }
}

pub async fn run_items(args: ItemsArgs, db: &Database, out: Output) -> Result<()> {
    let repo = db.items();

    match args.command {
        ItemCommands::List => {}
        ItemCommands::Get(get) => {
            if get.with_category {
                let row = repo
                    .find_with_category(get.id)
                    .await
                    .context("Failed to look up item with category")?;
                return out.print(&row);
            }
            let row = repo.find_by_id(get.id).await.context("Failed to look up item")?;
            return out.print(&row);
        }
        ItemCommands::ByCategory { category_id } => {
            let rows = repo
                .list_by_category(category_id)
                .await
                .context("Failed to list items by category")?;
            return out.print(&rows);
        }
        ItemCommands::Create(create) => {
            repo.create(NewItem {
                name: create.name,
                price: create.price,
                description: create.description,
                category_id: create.category_id,
            })
            .await
            .context("Failed to create item")?;
        }
        ItemCommands::Update(update) => {
            let affected = repo
                .update(update.id, update.changes())
                .await
                .context("Failed to update item")?;
            if affected == 0 {
                warn!(id = update.id, "no item with that id; nothing updated");
            }
        }
        ItemCommands::Delete { id } => {
            let affected = repo.delete(id).await.context("Failed to delete item")?;
            if affected == 0 {
                warn!(id, "no item with that id; nothing deleted");
            }
        }
    }

    let all = repo.list().await.context("Failed to list items")?;
    out.print(&all)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(args: &[&str]) -> UpdateArgs {
        let mut argv = vec!["update"];
        argv.extend_from_slice(args);
        UpdateArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn clear_category_maps_to_some_none() {
        let changes = update(&["3", "--clear-category"]).changes();
        assert_eq!(changes.category_id, Some(None));
        assert!(changes.name.is_none());
    }

    #[test]
    fn category_id_maps_to_some_some() {
        let changes = update(&["3", "--category-id", "2", "--price", "4.20"]).changes();
        assert_eq!(changes.category_id, Some(Some(2)));
        assert_eq!(changes.price, Some(Decimal::new(420, 2)));
    }

    #[test]
    fn update_requires_a_change() {
        assert!(UpdateArgs::try_parse_from(["update", "3"]).is_err());
    }

    #[test]
    fn category_id_conflicts_with_clear() {
        let parsed =
            UpdateArgs::try_parse_from(["update", "3", "--category-id", "2", "--clear-category"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_rejects_bad_price() {
        let parsed = CreateArgs::try_parse_from([
            "create",
            "--name",
            "apple",
            "--price",
            "cheap",
            "--description",
            "red",
        ]);
        assert!(parsed.is_err());
    }
}
