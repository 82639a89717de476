//! DDL for the `pets` and `meals` tables.

use tracing::info;

use crate::error::PetMealsDbError;
use crate::sqlite::SqliteConnection;

pub const CREATE_PETS_SQL: &str = "
    -- pets table
    CREATE TABLE IF NOT EXISTS pets (
        pets_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        species TEXT NOT NULL,
        age VARCHAR(2) NOT NULL
    );
";

pub const CREATE_MEALS_SQL: &str = "
    -- meals table
    CREATE TABLE IF NOT EXISTS meals (
        id INTEGER PRIMARY KEY,
        pets_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        type_of_meal VARCHAR(15) NOT NULL,
        pet_food_name TEXT NOT NULL,
        amount VARCHAR(10),
        FOREIGN KEY(pets_id) REFERENCES pets(pets_id)
    );
";

/// Run a non-parameterized statement such as DDL.
///
/// # Errors
/// Returns `PetMealsDbError::SqliteError` if the statement fails; the schema is left as it was.
pub fn execute_statement(conn: &SqliteConnection, sql: &str) -> Result<(), PetMealsDbError> {
    conn.execute_batch(sql)
}

/// Create both tables if they do not already exist. Safe to call repeatedly.
///
/// # Errors
/// Returns the first DDL failure.
pub fn initialize_schema(conn: &SqliteConnection) -> Result<(), PetMealsDbError> {
    execute_statement(conn, CREATE_PETS_SQL)?;
    execute_statement(conn, CREATE_MEALS_SQL)?;
    info!(path = conn.path(), "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_idempotent() {
        let conn = SqliteConnection::open_in_memory().expect("open");
        initialize_schema(&conn).expect("first");
        initialize_schema(&conn).expect("second");

        let rs = conn
            .execute_select(
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                &[],
            )
            .expect("tables");
        let names: Vec<&str> = rs
            .iter()
            .filter_map(|row| row.get("name").and_then(|v| v.as_text()))
            .collect();
        assert_eq!(names, vec!["meals", "pets"]);
    }

    #[test]
    fn meals_columns_match_ddl() {
        let conn = SqliteConnection::open_in_memory().expect("open");
        initialize_schema(&conn).expect("schema");
        let rs = conn
            .execute_select("SELECT name, type, \"notnull\" FROM pragma_table_info('meals')", &[])
            .expect("pragma");
        let cols: Vec<(String, String, i64)> = rs
            .iter()
            .map(|row| {
                (
                    row.get("name").and_then(|v| v.as_text()).unwrap_or_default().to_string(),
                    row.get("type").and_then(|v| v.as_text()).unwrap_or_default().to_string(),
                    row.get("notnull").and_then(|v| v.as_int()).copied().unwrap_or(-1),
                )
            })
            .collect();
        assert_eq!(
            cols,
            vec![
                ("id".to_string(), "INTEGER".to_string(), 0),
                ("pets_id".to_string(), "INTEGER".to_string(), 1),
                ("date".to_string(), "TEXT".to_string(), 1),
                ("type_of_meal".to_string(), "VARCHAR(15)".to_string(), 1),
                ("pet_food_name".to_string(), "TEXT".to_string(), 1),
                ("amount".to_string(), "VARCHAR(10)".to_string(), 0),
            ]
        );
    }

    #[test]
    fn bad_ddl_surfaces_error() {
        let conn = SqliteConnection::open_in_memory().expect("open");
        let err = execute_statement(&conn, "CREATE TABLE (").err().expect("syntax error");
        assert!(matches!(err, PetMealsDbError::SqliteError(_)));
    }
}
