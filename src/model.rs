use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::PetMealsDbError;
use crate::results::CustomDbRow;
use crate::types::RowValues;

/// The two tables this crate knows how to insert into.
///
/// Every generic operation also accepts a plain `&str` table name; `Table` implements
/// `AsRef<str>` so either works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Pets,
    Meals,
}

impl Table {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Table::Pets => "pets",
            Table::Meals => "meals",
        }
    }

    /// Primary key column. `update` always filters on the literal `id` column, so it only
    /// matches this for `meals`.
    #[must_use]
    pub fn key_column(self) -> &'static str {
        match self {
            Table::Pets => "pets_id",
            Table::Meals => "id",
        }
    }

    /// Columns bound by the insert template, in bind order.
    #[must_use]
    pub fn insert_columns(self) -> &'static [&'static str] {
        match self {
            Table::Pets => &["name", "species", "age"],
            Table::Meals => &["pets_id", "date", "type_of_meal", "pet_food_name", "amount"],
        }
    }

    /// Fixed positional INSERT statement for this table.
    #[must_use]
    pub fn insert_sql(self) -> &'static str {
        match self {
            Table::Pets => "INSERT INTO pets(name, species, age) VALUES(?,?,?)",
            Table::Meals => {
                "INSERT INTO meals(pets_id, date, type_of_meal, pet_food_name, amount) VALUES(?,?,?,?,?)"
            }
        }
    }
}

impl AsRef<str> for Table {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pet row to insert. `age` is stored as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub age: String,
}

impl NewPet {
    #[must_use]
    pub fn new(name: impl Into<String>, species: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            age: age.into(),
        }
    }

    /// Values in `Table::Pets` insert order.
    #[must_use]
    pub fn to_params(&self) -> Vec<RowValues> {
        vec![
            RowValues::from(self.name.as_str()),
            RowValues::from(self.species.as_str()),
            RowValues::from(self.age.as_str()),
        ]
    }
}

/// A meal row to insert, not yet tied to a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeal {
    pub date: String,
    pub type_of_meal: String,
    pub pet_food_name: String,
    pub amount: Option<String>,
}

impl NewMeal {
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        type_of_meal: impl Into<String>,
        pet_food_name: impl Into<String>,
        amount: Option<&str>,
    ) -> Self {
        Self {
            date: date.into(),
            type_of_meal: type_of_meal.into(),
            pet_food_name: pet_food_name.into(),
            amount: amount.map(str::to_string),
        }
    }

    /// Values in `Table::Meals` insert order, with the owning pet id first.
    #[must_use]
    pub fn to_params(&self, pets_id: i64) -> Vec<RowValues> {
        vec![
            RowValues::Int(pets_id),
            RowValues::from(self.date.as_str()),
            RowValues::from(self.type_of_meal.as_str()),
            RowValues::from(self.pet_food_name.as_str()),
            RowValues::from(self.amount.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    pub pets_id: i64,
    pub name: String,
    pub species: String,
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub id: i64,
    pub pets_id: i64,
    pub date: String,
    pub type_of_meal: String,
    pub pet_food_name: String,
    pub amount: Option<String>,
}

impl Meal {
    /// `date` parsed as a timestamp, if it is in `YYYY-MM-DD HH:MM:SS` form.
    #[must_use]
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        RowValues::from(self.date.as_str()).as_timestamp()
    }
}

fn int_column(row: &CustomDbRow, column: &str) -> Result<i64, PetMealsDbError> {
    row.get(column)
        .and_then(RowValues::as_int)
        .copied()
        .ok_or_else(|| column_error(column, "integer"))
}

fn text_column(row: &CustomDbRow, column: &str) -> Result<String, PetMealsDbError> {
    match row.get(column) {
        Some(RowValues::Text(s)) => Ok(s.clone()),
        Some(RowValues::Int(i)) => Ok(i.to_string()),
        Some(RowValues::Float(f)) => Ok(f.to_string()),
        _ => Err(column_error(column, "text")),
    }
}

fn column_error(column: &str, expected: &str) -> PetMealsDbError {
    PetMealsDbError::ParameterError(format!("column `{column}` missing or not {expected}"))
}

impl TryFrom<&CustomDbRow> for Pet {
    type Error = PetMealsDbError;

    fn try_from(row: &CustomDbRow) -> Result<Self, Self::Error> {
        Ok(Pet {
            pets_id: int_column(row, "pets_id")?,
            name: text_column(row, "name")?,
            species: text_column(row, "species")?,
            age: text_column(row, "age")?,
        })
    }
}

impl TryFrom<&CustomDbRow> for Meal {
    type Error = PetMealsDbError;

    fn try_from(row: &CustomDbRow) -> Result<Self, Self::Error> {
        let amount = match row.get("amount") {
            Some(RowValues::Null) => None,
            _ => Some(text_column(row, "amount")?),
        };
        Ok(Meal {
            id: int_column(row, "id")?,
            pets_id: int_column(row, "pets_id")?,
            date: text_column(row, "date")?,
            type_of_meal: text_column(row, "type_of_meal")?,
            pet_food_name: text_column(row, "pet_food_name")?,
            amount,
        })
    }
}
