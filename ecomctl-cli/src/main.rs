//! ecomctl CLI - CRUD for the ecommerce catalog
//!
//! Entry point for the `ecomctl` command-line tool, which provides:
//! - Connectivity check (`ping`)
//! - Schema sync for the `category` and `items` tables (`migrate`)
//! - Category operations (`categories` subcommand)
//! - Item operations (`items` subcommand)
//! - Connection settings inspection (`config` subcommand)
//!
//! Every command prints JSON to stdout; logs go to stderr.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use ecomctl_db::Database;
use tracing::{debug, info};

mod commands;
mod config;
mod output;
mod tracing_setup;

use config::ConnectionArgs;
use output::Output;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "ecomctl",
    author,
    version,
    about = "Create, read, update and delete catalog categories and items",
    long_about = "Talks to the PostgreSQL `ecommerce` database (localhost by default). \
                  Results are printed as JSON so they can be piped to jq."
)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Db(DbCommands),
    /// Inspect connection settings (path, show)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Commands that need a database handle
#[derive(Subcommand, Debug)]
enum DbCommands {
    /// Check that the database accepts the connection settings
    Ping,
    /// Create the category and items tables if missing
    Migrate,
    /// Category operations (list, find-by-name, get, create, update, delete)
    Categories(commands::categories::CategoriesArgs),
    /// Item operations (list, get, by-category, create, update, delete)
    Items(commands::items::ItemsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Before parsing, so clap's `env` attributes see .env values
    let dotenv_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    for path in &dotenv_files {
        debug!("Loaded .env from {}", path.display());
    }

    let out = Output { pretty: cli.pretty };

    match cli.command {
        Commands::Db(command) => {
            let db_config = cli.connection.resolve()?;
            info!("Using database {}", db_config.target());
            let db = Database::connect(&db_config).context("Invalid database settings")?;

            let result = run_with_db(command, &db, out).await;
            db.close().await;
            result
        }
        Commands::Config(args) => {
            config::run_config(args, &cli.connection, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions(args) => {
            run_completions(args);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_with_db(command: DbCommands, db: &Database, out: Output) -> Result<ExitCode> {
    match command {
        DbCommands::Ping => {
            let connected = commands::run_ping(db, out).await?;
            return Ok(if connected {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        DbCommands::Migrate => commands::run_migrate(db).await?,
        DbCommands::Categories(args) => commands::run_categories(args, db, out).await?,
        DbCommands::Items(args) => commands::run_items(args, db, out).await?,
    }
    Ok(ExitCode::SUCCESS)
}

fn run_completions(args: CompletionsArgs) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
}
