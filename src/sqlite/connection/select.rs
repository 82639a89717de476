use tracing::debug;

use crate::error::PetMealsDbError;
use crate::results::ResultSet;
use crate::sqlite::params::Params;
use crate::sqlite::query::build_result_set;
use crate::types::RowValues;

use super::SqliteConnection;

impl SqliteConnection {
    /// Execute a SELECT and materialize into a `ResultSet`.
    ///
    /// # Errors
    /// Returns `PetMealsDbError` if preparing or executing the query fails.
    pub fn execute_select(
        &self,
        query: &str,
        params: &[RowValues],
    ) -> Result<ResultSet, PetMealsDbError> {
        let converted = Params::convert(params)?;
        debug!(sql = query, params = params.len(), "execute select");
        let mut stmt = self
            .conn
            .prepare(query)
            .map_err(PetMealsDbError::SqliteError)?;
        build_result_set(&mut stmt, converted.as_values())
    }
}
