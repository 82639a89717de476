//! Convenient imports for common functionality.

pub use crate::crud::{
    Lenient, add_meal, add_pet, delete_all, delete_where, delete_where_with, insert, select_all,
    select_where, select_where_with, update,
};
pub use crate::error::PetMealsDbError;
pub use crate::model::{Meal, NewMeal, NewPet, Pet, Table};
pub use crate::query_builder::{Assignments, EmptyFilterPolicy, Filters, QueryOptions};
pub use crate::results::{CustomDbRow, ResultSet};
pub use crate::schema::{execute_statement, initialize_schema};
pub use crate::sqlite::{SqliteConnection, SqliteOptions, SqliteOptionsBuilder};
pub use crate::types::RowValues;
