//! Error types for ecomctl-db

use std::path::PathBuf;

use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

/// Database error type
#[derive(Error, Debug)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A schema sync step failed
    #[error("migration step '{step}' failed: {source}")]
    Migrate {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Connection settings could not be turned into connect options
    #[error("invalid database config: {reason}")]
    Config { reason: String },

    /// Config file exists but could not be read or parsed
    #[error("failed to load config file {path:?}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DbError::Config {
            reason: "bad url".to_string(),
        };
        assert_eq!(err.to_string(), "invalid database config: bad url");
    }

    #[test]
    fn migrate_error_names_step() {
        let err = DbError::Migrate {
            step: "create items",
            source: sqlx::Error::RowNotFound,
        };
        assert!(err.to_string().starts_with("migration step 'create items' failed"));
    }
}
