use pet_meals::prelude::*;
use tempfile::tempdir;

#[test]
fn file_store_persists_across_connections() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("database.db").to_string_lossy().into_owned();

    let conn = SqliteConnection::open(path.clone())?;
    initialize_schema(&conn)?;
    add_pet(&conn, &NewPet::new("Behemocik", "cat", "11"))?;
    conn.close()?;
    assert!(dir.path().join("database.db").exists());

    let conn = SqliteOptions::builder(path).open()?;
    initialize_schema(&conn)?;
    let rs = select_all(&conn, Table::Pets)?;
    assert_eq!(rs.len(), 1);
    assert_eq!(Pet::try_from(&rs.results[0])?.name, "Behemocik");
    conn.close()?;
    Ok(())
}

#[test]
fn unopenable_path_is_a_connection_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("missing").join("nested").join("database.db");

    let err = SqliteConnection::open(path.to_string_lossy().into_owned())
        .err()
        .ok_or("open in a missing directory succeeded")?;
    assert!(matches!(err, PetMealsDbError::ConnectionError(_)), "{err}");

    let err = SqliteConnection::open("").err().ok_or("blank path accepted")?;
    assert!(matches!(err, PetMealsDbError::ConfigError(_)));
    Ok(())
}

#[test]
fn foreign_keys_are_off_unless_requested() -> Result<(), Box<dyn std::error::Error>> {
    let orphan = NewMeal::new("2023-09-12 20:00:00", "supper", "Fitmin Medium Light", Some("170g"));

    let conn = SqliteConnection::open_in_memory()?;
    initialize_schema(&conn)?;
    assert!(!conn.foreign_keys_enabled()?);
    assert_eq!(add_meal(&conn, 42, &orphan)?, 1);

    let dir = tempdir()?;
    let path = dir.path().join("fk.db").to_string_lossy().into_owned();
    let conn = SqliteOptions::builder(path).foreign_keys(true).open()?;
    initialize_schema(&conn)?;
    assert!(conn.foreign_keys_enabled()?);
    let err = add_meal(&conn, 42, &orphan).err().ok_or("orphan meal accepted")?;
    assert!(matches!(err, PetMealsDbError::SqliteError(_)));

    let pet = add_pet(&conn, &NewPet::new("Lucynka", "dog", "2"))?;
    add_meal(&conn, pet, &orphan)?;
    Ok(())
}
