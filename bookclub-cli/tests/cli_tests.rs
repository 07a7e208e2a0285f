//! Integration tests for the Bookclub CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SHEET: &str = "Tytuł,Autor,Notatka,Okładka,Link,Wybrała,Status,Data spotkania,Ocena,Gatunek\n\
Lalka,Bolesław Prus,,,https://lubimyczytac.pl/lalka,Ania,Czytamy,20.03.2024,,Powieść\n\
Solaris,Stanisław Lem,Świetna dyskusja,\"=IMAGE(\"\"https://img.example/solaris.jpg\"\")\",,Ola,Przeczytane,01.03.2024,\"4,5\",\"Sci-fi, #Klasyka\"\n\
Ferdydurke,Witold Gombrowicz,,,,Kasia,przeczytane,12.01.2023,7,\n\
,Bez tytułu,,,,,przeczytane,01.01.2024,5,\n";

/// Write a CSV file for testing
fn create_test_sheet(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("books"))
        .stdout(predicate::str::contains("headers"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookclub"));
}

#[test]
fn test_show_help() {
    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show the book being read now"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_url_and_file_conflict() {
    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args([
        "show",
        "--url",
        "https://example.com/sheet.csv",
        "--file",
        "sheet.csv",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_show_text() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_sheet(&temp_dir, "sheet.csv", SHEET);

    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args(["show", "--file", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lalka <https://lubimyczytac.pl/lalka>"))
        .stdout(predicate::str::contains("Porozmawiamy o książce: 20.03.2024"))
        .stdout(predicate::str::contains("Przeczytane (2)"))
        .stdout(predicate::str::contains("Ocena:     5.00 / 5"))
        .stdout(predicate::str::contains("Okładka:   https://img.example/solaris.jpg"))
        .stdout(predicate::str::contains("Ostatnia aktualizacja:"))
        .stdout(predicate::str::contains("Bez tytułu").not());
}

#[test]
fn test_show_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_sheet(&temp_dir, "sheet.csv", SHEET);

    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    let output = cmd
        .args(["show", "--json", "--file", input.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    // Verify it's valid JSON
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(json["nowReading"]["title"], "Lalka");

    let history = json["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["title"], "Solaris");
    assert_eq!(history[0]["rating"]["value"], 4.5);
    assert_eq!(history[0]["note"], "Świetna dyskusja");
    assert_eq!(history[1]["title"], "Ferdydurke");
    assert_eq!(history[1]["rating"]["value"], 5.0);
    assert_eq!(history[1]["cover"]["initials"], "F");
}

#[test]
fn test_show_empty_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_sheet(&temp_dir, "empty.csv", "Tytuł,Status\n");

    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args(["show", "--file", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brak aktualnie czytanej książki."))
        .stdout(predicate::str::contains("Brak przeczytanych książek."));
}

#[test]
fn test_show_nonexistent_file() {
    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args(["show", "--file", "/nonexistent/sheet.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Nie udało się pobrać danych. Spróbuj ponownie później.",
        ));
}

#[test]
fn test_books_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_sheet(&temp_dir, "sheet.csv", SHEET);

    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    let output = cmd
        .args(["books", "--json", "--file", input.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let books = json.as_array().unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["status"], "czytamy");
    assert_eq!(books[1]["ratingRaw"], "4,5");
    assert_eq!(books[1]["meetingDateRaw"], "01.03.2024");
}

#[test]
fn test_books_text() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_sheet(&temp_dir, "sheet.csv", SHEET);

    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args(["books", "--file", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:        Ferdydurke"))
        .stdout(predicate::str::contains("3 books"));
}

#[test]
fn test_headers_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_sheet(&temp_dir, "sheet.csv", "Title,Kto,Okładka\nDune,Herbert,\n");

    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args(["headers", "--file", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("column 1 \"Title\""))
        .stdout(predicate::str::contains("column 2 \"Kto\" (by position)"))
        .stdout(predicate::str::contains("genre        missing"));
}

#[test]
fn test_verbose_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_sheet(&temp_dir, "sheet.csv", SHEET);

    let mut cmd = Command::cargo_bin("bookclub-cli").unwrap();
    cmd.args(["--verbose", "books", "--file", input.to_str().unwrap()])
        .assert()
        .success();
}
