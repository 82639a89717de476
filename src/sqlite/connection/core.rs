use std::fmt;

use tracing::debug;

use crate::error::PetMealsDbError;
use crate::sqlite::config::SqliteOptions;

/// The single connection handle used for the life of the process.
///
/// Every statement runs in `SQLite`'s autocommit mode, so each mutating call is durable
/// when it returns. There is no multi-statement transaction boundary.
pub struct SqliteConnection {
    pub(crate) conn: rusqlite::Connection,
    path: String,
}

impl SqliteConnection {
    /// Open the file-backed store at `path`, creating the file if it does not exist.
    ///
    /// # Errors
    /// Returns `PetMealsDbError::ConnectionError` if the driver cannot open the file.
    pub fn open(path: impl Into<String>) -> Result<Self, PetMealsDbError> {
        Self::open_with(&SqliteOptions::new(path))
    }

    /// Open a connection and apply `opts`.
    ///
    /// # Errors
    /// Returns `PetMealsDbError` if the options are invalid, the file cannot be opened,
    /// or the foreign key pragma fails.
    pub fn open_with(opts: &SqliteOptions) -> Result<Self, PetMealsDbError> {
        opts.validate()?;
        let conn = rusqlite::Connection::open(&opts.db_path).map_err(|e| {
            PetMealsDbError::ConnectionError(format!(
                "failed to open SQLite database {}: {e}",
                opts.db_path
            ))
        })?;
        let conn = Self {
            conn,
            path: opts.db_path.clone(),
        };
        conn.apply_options(opts)?;
        debug!(path = %conn.path, "opened sqlite connection");
        Ok(conn)
    }

    /// Open a private in-memory store.
    ///
    /// # Errors
    /// Returns `PetMealsDbError::ConnectionError` if the driver cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, PetMealsDbError> {
        let conn = rusqlite::Connection::open_in_memory().map_err(|e| {
            PetMealsDbError::ConnectionError(format!("failed to open in-memory SQLite: {e}"))
        })?;
        Ok(Self {
            conn,
            path: ":memory:".to_string(),
        })
    }

    fn apply_options(&self, opts: &SqliteOptions) -> Result<(), PetMealsDbError> {
        if opts.enforce_foreign_keys {
            self.set_foreign_keys(true)?;
        }
        Ok(())
    }

    /// Toggle `PRAGMA foreign_keys` on this connection.
    ///
    /// # Errors
    /// Returns `PetMealsDbError::SqliteError` if the pragma fails.
    pub fn set_foreign_keys(&self, enabled: bool) -> Result<(), PetMealsDbError> {
        let pragma = if enabled {
            "PRAGMA foreign_keys = ON;"
        } else {
            "PRAGMA foreign_keys = OFF;"
        };
        self.conn
            .execute_batch(pragma)
            .map_err(PetMealsDbError::SqliteError)
    }

    /// Whether `PRAGMA foreign_keys` is currently on.
    ///
    /// # Errors
    /// Returns `PetMealsDbError::SqliteError` if the pragma cannot be read.
    pub fn foreign_keys_enabled(&self) -> Result<bool, PetMealsDbError> {
        let enabled: i64 = self
            .conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))?;
        Ok(enabled == 1)
    }

    /// Path this connection was opened with (`:memory:` for in-memory stores).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Release the handle.
    ///
    /// # Errors
    /// Returns `PetMealsDbError::ConnectionError` if the driver refuses to close, for
    /// example while a statement is still outstanding.
    pub fn close(self) -> Result<(), PetMealsDbError> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| {
            PetMealsDbError::ConnectionError(format!("failed to close SQLite database {path}: {e}"))
        })?;
        debug!(%path, "closed sqlite connection");
        Ok(())
    }
}

impl fmt::Debug for SqliteConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteConnection")
            .field("path", &self.path)
            .field("autocommit", &self.conn.is_autocommit())
            .finish()
    }
}
