//! Connection settings for the ecommerce database
//!
//! Defaults point at a local development database: `localhost:5432/ecommerce`
//! with empty credentials. A `[database]` table in `~/.ecomctl/config.toml`
//! overrides any of the fields; the CLI layers flags and environment on top
//! through [`ConnectionOverrides`], which beat both the discrete fields and
//! the URL.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

use crate::error::{DbError, DbResult};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_DATABASE: &str = "ecommerce";

/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Empty means "let the driver decide" (PGUSER or the OS user)
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Full connection string; takes precedence over the discrete fields
    pub url: Option<String>,
    /// Explicit settings applied last, on top of the URL or the fields
    #[serde(skip)]
    pub overrides: ConnectionOverrides,
}

/// Per-invocation settings that win over everything in the config file,
/// including `url`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            username: String::new(),
            password: String::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
            url: None,
            overrides: ConnectionOverrides::default(),
        }
    }
}

/// On-disk layout of `config.toml`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    database: DbConfig,
}

impl DbConfig {
    /// Load settings from an explicit path. A missing file yields defaults;
    /// an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> DbResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DbError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| DbError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(file.database)
    }

    /// Get the config directory: ~/.ecomctl
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ecomctl")
    }

    /// Get config file path: ~/.ecomctl/config.toml
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Build driver connect options from these settings.
    ///
    /// The URL (if any) replaces the discrete fields; overrides are applied
    /// on top of either. Empty username/password are left unset so the
    /// driver applies its own defaults.
    pub fn connect_options(&self) -> DbResult<PgConnectOptions> {
        let mut opts = match &self.url {
            Some(url) => url.parse::<PgConnectOptions>().map_err(|e| DbError::Config {
                reason: format!("invalid database url: {e}"),
            })?,
            None => {
                let mut opts = PgConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .database(&self.database);
                if !self.username.is_empty() {
                    opts = opts.username(&self.username);
                }
                if !self.password.is_empty() {
                    opts = opts.password(&self.password);
                }
                opts
            }
        };

        let o = &self.overrides;
        if let Some(host) = &o.host {
            opts = opts.host(host);
        }
        if let Some(port) = o.port {
            opts = opts.port(port);
        }
        if let Some(database) = &o.database {
            opts = opts.database(database);
        }
        if let Some(username) = o.username.as_deref().filter(|u| !u.is_empty()) {
            opts = opts.username(username);
        }
        if let Some(password) = o.password.as_deref().filter(|p| !p.is_empty()) {
            opts = opts.password(password);
        }

        Ok(opts)
    }

    /// Whether a password is configured outside the URL.
    pub fn has_password(&self) -> bool {
        let overridden = self
            .overrides
            .password
            .as_deref()
            .is_some_and(|p| !p.is_empty());
        overridden || !self.password.is_empty()
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Human-readable target for logs, never includes the password.
    pub fn target(&self) -> String {
        match self.connect_options() {
            Ok(opts) => format!(
                "{}@{}:{}/{}",
                opts.get_username(),
                opts.get_host(),
                opts.get_port(),
                opts.get_database().unwrap_or_default()
            ),
            Err(_) => "<invalid url>".to_string(),
        }
    }
}
