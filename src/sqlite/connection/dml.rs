use tracing::debug;

use crate::error::PetMealsDbError;
use crate::sqlite::params::Params;
use crate::types::RowValues;

use super::SqliteConnection;

impl SqliteConnection {
    /// Execute a batch of non-parameterized statements (DDL, pragmas).
    ///
    /// # Errors
    /// Returns `PetMealsDbError::SqliteError` if any statement in the batch fails.
    pub fn execute_batch(&self, query: &str) -> Result<(), PetMealsDbError> {
        debug!(sql = query.trim(), "execute batch");
        self.conn
            .execute_batch(query)
            .map_err(PetMealsDbError::SqliteError)
    }

    /// Execute a DML statement and return rows affected.
    ///
    /// # Errors
    /// Returns `PetMealsDbError` if converting parameters, preparing, or executing fails.
    pub fn execute_dml(&self, query: &str, params: &[RowValues]) -> Result<usize, PetMealsDbError> {
        let converted = Params::convert(params)?;
        debug!(sql = query, params = params.len(), "execute dml");
        let mut stmt = self
            .conn
            .prepare_cached(query)
            .map_err(PetMealsDbError::SqliteError)?;
        let affected = stmt
            .execute(&converted.as_refs()[..])
            .map_err(PetMealsDbError::SqliteError)?;
        Ok(affected)
    }

    /// Execute an INSERT and return the generated row identifier.
    ///
    /// # Errors
    /// Returns `PetMealsDbError` if the statement fails.
    pub fn execute_insert(
        &self,
        query: &str,
        params: &[RowValues],
    ) -> Result<i64, PetMealsDbError> {
        self.execute_dml(query, params)?;
        Ok(self.conn.last_insert_rowid())
    }
}
