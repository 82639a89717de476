//! Scripted walk through every generic operation against the seed data.

use std::io::Write;

use clap::ValueEnum;

use crate::crud::{self, Lenient};
use crate::error::PetMealsDbError;
use crate::model::{NewMeal, NewPet, Table};
use crate::query_builder::{Assignments, Filters};
use crate::results::ResultSet;
use crate::sqlite::SqliteConnection;

/// How result sets are written to the demo's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `[(1, 'Czaruś', 'cat', '8'), ...]`
    #[default]
    Tuples,
    /// A JSON array of objects keyed by column name, one result set per line.
    Json,
}

#[must_use]
pub fn seed_pets() -> Vec<NewPet> {
    vec![
        NewPet::new("Czaruś", "cat", "8"),
        NewPet::new("Behemocik", "cat", "11"),
        NewPet::new("Celinka", "cat", "11"),
        NewPet::new("Lucynka", "dog", "2"),
    ]
}

#[must_use]
pub fn seed_meals() -> Vec<NewMeal> {
    const DATE: &str = "2023-09-12 20:00:00";
    const CHICKEN_DUCK: &str = "Wiejska Zagroda Kurczak z Kaczką";
    vec![
        NewMeal::new(DATE, "supper", CHICKEN_DUCK, Some("45g")),
        NewMeal::new(DATE, "supper", CHICKEN_DUCK, Some("55g")),
        NewMeal::new(DATE, "supper", CHICKEN_DUCK, Some("50g")),
        NewMeal::new(DATE, "supper", "Fitmin Medium Light", Some("170g")),
    ]
}

/// What the script observed, step by step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    /// `(pets_id, meal id)` for each seeded pair
    pub inserted: Vec<(i64, i64)>,
    pub meals_after_seed: usize,
    pub pets_aged_11: usize,
    pub meal_1_after_update: usize,
    pub meals_after_delete_where: usize,
    pub meals_after_delete_all: usize,
}

/// Seed the tables and run each generic operation in order, writing results to `out`.
///
/// Inserts and selects propagate errors. The update and deletes go through [`Lenient`], so
/// their failures are logged and the script carries on.
///
/// # Errors
/// Returns the first failing insert or select, or an I/O error from `out`.
pub fn run<W: Write>(
    conn: &SqliteConnection,
    out: &mut W,
    format: OutputFormat,
) -> Result<DemoReport, PetMealsDbError> {
    let mut report = DemoReport::default();
    let lenient = Lenient::new(conn);

    // Pet and meal are two separate commits; a failure between them leaves the pet behind.
    for (pet, meal) in seed_pets().iter().zip(seed_meals().iter()) {
        let pet_id = crud::add_pet(conn, pet)?;
        let meal_id = crud::add_meal(conn, pet_id, meal)?;
        writeln!(out, "{pet_id} {meal_id}")?;
        report.inserted.push((pet_id, meal_id));
    }

    let meals = crud::select_all(conn, Table::Meals)?;
    report.meals_after_seed = print(out, &meals, format)?;

    let aged = crud::select_where(conn, Table::Pets, &Filters::new().eq("age", "11"))?;
    report.pets_aged_11 = print(out, &aged, format)?;

    lenient.update(Table::Meals, 1, &Assignments::new().set("amount", "55g"));
    let meal = crud::select_where(conn, Table::Meals, &Filters::new().eq("id", "1"))?;
    report.meal_1_after_update = print(out, &meal, format)?;

    lenient.delete_where(
        Table::Meals,
        &Filters::new().eq("pet_food_name", "Fitmin Medium Light"),
    );
    let meals = crud::select_all(conn, Table::Meals)?;
    report.meals_after_delete_where = print(out, &meals, format)?;

    lenient.delete_all(Table::Meals);
    let meals = crud::select_all(conn, Table::Meals)?;
    report.meals_after_delete_all = print(out, &meals, format)?;

    Ok(report)
}

fn print<W: Write>(
    out: &mut W,
    rs: &ResultSet,
    format: OutputFormat,
) -> Result<usize, PetMealsDbError> {
    match format {
        OutputFormat::Tuples => writeln!(out, "{rs}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, rs).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(rs.len())
}
