use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(dir: &Path, args: &[&str]) -> Result<Output, Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_pet-meals"))
        .current_dir(dir)
        .args(args)
        .output()?;
    Ok(output)
}

#[test]
fn default_run_creates_database_in_working_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let output = run_cli(dir.path(), &[])?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(dir.path().join("database.db").is_file());

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9, "stdout: {stdout}");
    assert_eq!(&lines[..4], &["1 1", "2 2", "3 3", "4 4"]);
    assert_eq!(lines[8], "[]");

    // Logs stay on stderr and carry no color codes when redirected.
    assert!(stderr.contains("OK"), "stderr: {stderr}");
    assert!(stderr.contains("Deleted"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr: {stderr:?}");
    Ok(())
}

#[test]
fn second_run_keeps_the_earlier_pets() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    run_cli(dir.path(), &[])?;
    let output = run_cli(dir.path(), &[])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(&lines[..4], &["5 1", "6 2", "7 3", "8 4"]);
    Ok(())
}

#[test]
fn unopenable_path_is_logged_and_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("missing").join("x.db");
    let db = db.to_str().ok_or("temp path is not utf-8")?;
    let output = run_cli(dir.path(), &["--db", db])?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Connection error"), "stderr: {stderr}");
    assert!(!dir.path().join("missing").exists());
    Ok(())
}

#[test]
fn non_database_file_is_logged_and_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let junk = dir.path().join("junk.db");
    fs::write(&junk, "this is a text file, not an SQLite database\n".repeat(32))?;
    let junk = junk.to_str().ok_or("temp path is not utf-8")?;
    let output = run_cli(dir.path(), &["--db", junk])?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("not a database"), "stderr: {stderr}");
    Ok(())
}
