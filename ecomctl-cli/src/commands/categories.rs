//! Category commands - list, find, create, rename, delete
//!
//! Reads print their result as JSON. Mutations print the full category
//! list afterwards so the effect is visible in one call.
//!
//! ```bash
//! ecomctl categories create drinks
//! ecomctl categories update 9 sodas
//! ecomctl categories get 3 --pretty
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecomctl_db::{Database, NewCategory};
use tracing::warn;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoryCommands,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,
    /// Find categories with an exact name
    FindByName {
        /// Category name to match
        name: String,
    },
    /// Get one category by id (prints null when missing)
    Get {
        /// Category id
        id: i32,
    },
    /// Create a category, then list all
    Create {
        /// Name of the new category
        name: String,
    },
    /// Rename a category, then list all
    Update {
        /// Category id
        id: i32,
        /// New name
        name: String,
    },
    /// Delete a category, then list all
    Delete {
        /// Category id
        id: i32,
    },
}

pub async fn run_categories(args: CategoriesArgs, db: &Database, out: Output) -> Result<()> {
    let repo = db.categories();

    match args.command {
        CategoryCommands::List => {}
        CategoryCommands::FindByName { name } => {
            let rows = repo
                .find_by_name(&name)
                .await
                .context("Failed to find categories by name")?;
            return out.print(&rows);
        }
        CategoryCommands::Get { id } => {
            let row = repo
                .find_by_id(id)
                .await
                .context("Failed to look up category")?;
            return out.print(&row);
        }
        CategoryCommands::Create { name } => {
            repo.create(NewCategory::new(name))
                .await
                .context("Failed to create category")?;
        }
        CategoryCommands::Update { id, name } => {
            let affected = repo
                .update_name(id, &name)
                .await
                .context("Failed to update category")?;
            if affected == 0 {
                warn!(id, "no category with that id; nothing updated");
            }
        }
        CategoryCommands::Delete { id } => {
            let affected = repo
                .delete(id)
                .await
                .context("Failed to delete category")?;
            if affected == 0 {
                warn!(id, "no category with that id; nothing deleted");
            }
        }
    }

    let all = repo.list().await.context("Failed to list categories")?;
    out.print(&all)
}
