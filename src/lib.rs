//! Small rusqlite helpers for a two-table pets and meals dataset.
//!
//! The generic operations in [`crud`] build parameterized SELECT/UPDATE/DELETE statements from
//! a table name and an ordered list of `(column, value)` pairs:
//!
//! ```rust
//! use pet_meals::prelude::*;
//!
//! # fn main() -> Result<(), PetMealsDbError> {
//! let conn = SqliteConnection::open_in_memory()?;
//! initialize_schema(&conn)?;
//!
//! let pets_id = add_pet(&conn, &NewPet::new("Celinka", "cat", "11"))?;
//! let rows = select_where(&conn, Table::Pets, &Filters::new().eq("age", "11"))?;
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows.results[0].get("pets_id"), Some(&RowValues::Int(pets_id)));
//! # Ok(())
//! # }
//! ```

pub mod crud;
pub mod demo;
pub mod error;
pub mod model;
pub mod prelude;
pub mod query_builder;
pub mod results;
pub mod schema;
pub mod sqlite;
pub mod types;

pub use error::PetMealsDbError;
pub use results::{CustomDbRow, ResultSet};
pub use sqlite::{SqliteConnection, SqliteOptions};
pub use types::RowValues;
