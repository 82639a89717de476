//! Generic create/read/update/delete over any table.
//!
//! Each call is one statement in autocommit mode: it is durable when it returns and nothing
//! spans calls. Failures come back as `Err`; nothing is rolled back or retried. `Lenient`
//! wraps the same calls for callers that want failures logged and swallowed instead.
//!
//! Table and column names are trusted identifiers and go into the SQL text as-is. See
//! [`crate::query_builder`].

use tracing::{debug, error, info};

use crate::error::PetMealsDbError;
use crate::model::{NewMeal, NewPet, Table};
use crate::query_builder::{self, Assignments, Filters, QueryAndParams, QueryOptions};
use crate::results::ResultSet;
use crate::sqlite::SqliteConnection;
use crate::types::RowValues;

/// Insert one row through `table`'s fixed template and return its row identifier.
///
/// # Errors
/// Returns `PetMealsDbError::ParameterError` if `values` does not match the template's
/// column count, or `SqliteError` if the insert fails (e.g. a NOT NULL or foreign key
/// violation).
pub fn insert(
    conn: &SqliteConnection,
    table: Table,
    values: &[RowValues],
) -> Result<i64, PetMealsDbError> {
    let expected = table.insert_columns().len();
    if values.len() != expected {
        return Err(PetMealsDbError::ParameterError(format!(
            "insert into {table} takes {expected} values, got {}",
            values.len()
        )));
    }
    conn.execute_insert(table.insert_sql(), values)
}

/// Insert a pet and return its `pets_id`.
///
/// # Errors
/// See [`insert`].
pub fn add_pet(conn: &SqliteConnection, pet: &NewPet) -> Result<i64, PetMealsDbError> {
    insert(conn, Table::Pets, &pet.to_params())
}

/// Insert a meal for `pets_id` and return its `id`.
///
/// # Errors
/// See [`insert`].
pub fn add_meal(
    conn: &SqliteConnection,
    pets_id: i64,
    meal: &NewMeal,
) -> Result<i64, PetMealsDbError> {
    insert(conn, Table::Meals, &meal.to_params(pets_id))
}

/// Every row of `table`, in the order the store returns them (insertion order for rowid
/// tables).
///
/// # Errors
/// Returns `PetMealsDbError::SqliteError` if the table does not exist.
pub fn select_all(
    conn: &SqliteConnection,
    table: impl AsRef<str>,
) -> Result<ResultSet, PetMealsDbError> {
    run_select(conn, &query_builder::select_all(table.as_ref()))
}

/// Rows of `table` matching every `column = value` pair in `filters`.
///
/// # Errors
/// Returns `PetMealsDbError::EmptyFilter` if `filters` is empty, or `SqliteError` for an
/// unknown table or column.
pub fn select_where(
    conn: &SqliteConnection,
    table: impl AsRef<str>,
    filters: &Filters,
) -> Result<ResultSet, PetMealsDbError> {
    select_where_with(conn, table, filters, QueryOptions::default())
}

/// [`select_where`] with explicit options for the empty-filter case.
///
/// # Errors
/// See [`select_where`]; under `EmptyFilterPolicy::Unfiltered` an empty filter set behaves
/// like [`select_all`].
pub fn select_where_with(
    conn: &SqliteConnection,
    table: impl AsRef<str>,
    filters: &Filters,
    options: QueryOptions,
) -> Result<ResultSet, PetMealsDbError> {
    let qp = query_builder::select_where(table.as_ref(), filters, options)?;
    run_select(conn, &qp)
}

/// Set `assignments` on the row of `table` whose `id` column equals `id`. Returns rows
/// affected; zero means no row had that id.
///
/// # Errors
/// Returns `PetMealsDbError::EmptyAssignments` if there is nothing to set, or `SqliteError`
/// for an unknown column (including tables without an `id` column, such as `pets`).
pub fn update(
    conn: &SqliteConnection,
    table: impl AsRef<str>,
    id: impl Into<RowValues>,
    assignments: &Assignments,
) -> Result<usize, PetMealsDbError> {
    let qp = query_builder::update(table.as_ref(), id, assignments)?;
    let affected = run_dml(conn, &qp)?;
    debug!(table = table.as_ref(), affected, "update committed");
    Ok(affected)
}

/// Delete rows of `table` matching every pair in `filters`. Returns rows deleted.
///
/// # Errors
/// Returns `PetMealsDbError::EmptyFilter` if `filters` is empty, or `SqliteError`.
pub fn delete_where(
    conn: &SqliteConnection,
    table: impl AsRef<str>,
    filters: &Filters,
) -> Result<usize, PetMealsDbError> {
    delete_where_with(conn, table, filters, QueryOptions::default())
}

/// [`delete_where`] with explicit options for the empty-filter case.
///
/// # Errors
/// See [`delete_where`]; under `EmptyFilterPolicy::Unfiltered` an empty filter set behaves
/// like [`delete_all`].
pub fn delete_where_with(
    conn: &SqliteConnection,
    table: impl AsRef<str>,
    filters: &Filters,
    options: QueryOptions,
) -> Result<usize, PetMealsDbError> {
    let qp = query_builder::delete_where(table.as_ref(), filters, options)?;
    let affected = run_dml(conn, &qp)?;
    debug!(table = table.as_ref(), affected, "delete committed");
    Ok(affected)
}

/// Delete every row of `table`. Returns rows deleted.
///
/// # Errors
/// Returns `PetMealsDbError::SqliteError` if the table does not exist.
pub fn delete_all(
    conn: &SqliteConnection,
    table: impl AsRef<str>,
) -> Result<usize, PetMealsDbError> {
    let affected = run_dml(conn, &query_builder::delete_all(table.as_ref()))?;
    debug!(table = table.as_ref(), affected, "delete committed");
    Ok(affected)
}

fn run_select(conn: &SqliteConnection, qp: &QueryAndParams) -> Result<ResultSet, PetMealsDbError> {
    conn.execute_select(&qp.query, &qp.params)
}

fn run_dml(conn: &SqliteConnection, qp: &QueryAndParams) -> Result<usize, PetMealsDbError> {
    conn.execute_dml(&qp.query, &qp.params)
}

/// The generic operations with failures logged and suppressed.
///
/// Reads and inserts return `None` on failure. Updates and deletes log `OK` / `Deleted` on
/// success and the driver error on failure, and never report either to the caller. A failed
/// update is a silent no-op.
#[derive(Debug, Clone, Copy)]
pub struct Lenient<'conn> {
    conn: &'conn SqliteConnection,
    options: QueryOptions,
}

impl<'conn> Lenient<'conn> {
    #[must_use]
    pub fn new(conn: &'conn SqliteConnection) -> Self {
        Self {
            conn,
            options: QueryOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn insert(&self, table: Table, values: &[RowValues]) -> Option<i64> {
        logged("insert", insert(self.conn, table, values))
    }

    #[must_use]
    pub fn select_all(&self, table: impl AsRef<str>) -> Option<ResultSet> {
        logged("select_all", select_all(self.conn, table))
    }

    #[must_use]
    pub fn select_where(&self, table: impl AsRef<str>, filters: &Filters) -> Option<ResultSet> {
        logged(
            "select_where",
            select_where_with(self.conn, table, filters, self.options),
        )
    }

    pub fn update(&self, table: impl AsRef<str>, id: impl Into<RowValues>, assignments: &Assignments) {
        if logged("update", update(self.conn, table, id, assignments)).is_some() {
            info!("OK");
        }
    }

    pub fn delete_where(&self, table: impl AsRef<str>, filters: &Filters) {
        if logged(
            "delete_where",
            delete_where_with(self.conn, table, filters, self.options),
        )
        .is_some()
        {
            info!("Deleted");
        }
    }

    pub fn delete_all(&self, table: impl AsRef<str>) {
        if logged("delete_all", delete_all(self.conn, table)).is_some() {
            info!("Deleted");
        }
    }
}

fn logged<T>(operation: &str, result: Result<T, PetMealsDbError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!(operation, "{e}");
            None
        }
    }
}
