use crate::error::PetMealsDbError;

use super::connection::SqliteConnection;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "database.db";

/// Options for opening a `SQLite` connection.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    pub db_path: String,
    /// Turn on `PRAGMA foreign_keys`. `SQLite` leaves foreign keys unenforced by default.
    pub enforce_foreign_keys: bool,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            enforce_foreign_keys: false,
        }
    }

    #[must_use]
    pub fn with_foreign_keys(mut self, enforce_foreign_keys: bool) -> Self {
        self.enforce_foreign_keys = enforce_foreign_keys;
        self
    }

    #[must_use]
    pub fn builder(db_path: impl Into<String>) -> SqliteOptionsBuilder {
        SqliteOptionsBuilder::new(db_path)
    }

    /// Check the options before handing them to the driver.
    ///
    /// # Errors
    ///
    /// Returns `PetMealsDbError::ConfigError` if the database path is blank.
    pub fn validate(&self) -> Result<(), PetMealsDbError> {
        if self.db_path.trim().is_empty() {
            return Err(PetMealsDbError::ConfigError(
                "database path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            opts: SqliteOptions::new(db_path),
        }
    }

    #[must_use]
    pub fn foreign_keys(mut self, enforce_foreign_keys: bool) -> Self {
        self.opts.enforce_foreign_keys = enforce_foreign_keys;
        self
    }

    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }

    /// Open a connection with these options.
    ///
    /// # Errors
    ///
    /// Returns `PetMealsDbError` if the options are invalid or the file cannot be opened.
    pub fn open(self) -> Result<SqliteConnection, PetMealsDbError> {
        SqliteConnection::open_with(&self.finish())
    }
}
