mod common;

use common::{read_lines, write_record_file};
use rollbook::exceptions::RollbookError;
use rollbook::models::LoadOutcome;
use rollbook::recordstore::store::RecordStore;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_puts_last_file_line_at_the_front() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("students.txt");
    write_record_file(&path, &["101 | Asha | CS", "102 | Ravi | EE"]);

    let mut store = RecordStore::new();
    let outcome = store.load_from_file(&path).unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded { added: 2 });
    let rolls: Vec<&str> = store.iter().map(|r| r.roll_number.as_str()).collect();
    assert_eq!(rolls, vec!["102", "101"]);
    assert_eq!(store.iter().next().unwrap().name, "Ravi");
}

#[test]
fn test_load_of_zero_byte_file_reports_empty_and_adds_nothing() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("students.txt");
    fs::write(&path, "").unwrap();

    // GIVEN a store that already holds a record
    let mut store = RecordStore::new();
    store.add("1", "Pre", "CS");

    // WHEN loading a zero-byte file
    let outcome = store.load_from_file(&path).unwrap();

    // THEN the outcome is the distinct empty signal and nothing changed
    assert_eq!(outcome, LoadOutcome::EmptyFile);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_load_of_missing_file_is_a_file_open_error_without_mutation() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("absent.txt");

    let mut store = RecordStore::new();
    let err = store.load_from_file(&path).unwrap_err();

    assert!(matches!(err, RollbookError::FileOpen { .. }));
    assert!(store.is_empty());
}

#[test]
fn test_malformed_lines_are_skipped_without_aborting() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("students.txt");
    write_record_file(
        &path,
        &[
            "101 | Asha | CS",
            "no delimiters here",
            "102 | only one",
            "103 | Ravi | EE",
        ],
    );

    let mut store = RecordStore::new();
    let outcome = store.load_from_file(&path).unwrap();

    // Only the two well-formed lines contribute records
    assert_eq!(outcome, LoadOutcome::Loaded { added: 2 });
    let rolls: Vec<&str> = store.iter().map(|r| r.roll_number.as_str()).collect();
    assert_eq!(rolls, vec!["103", "101"]);
}

#[test]
fn test_save_appends_instead_of_overwriting() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("students.txt");

    let mut store = RecordStore::new();
    store.add("101", "Asha", "CS");
    store.add("102", "Ravi", "EE");

    // WHEN saving twice
    assert_eq!(store.save_to_file(&path).unwrap(), 2);
    assert_eq!(read_lines(&path).len(), 2);

    store.save_to_file(&path).unwrap();

    // THEN the second save doubled the line count
    assert_eq!(read_lines(&path).len(), 4);
}

#[test]
fn test_save_writes_store_order_with_spaced_delimiters() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("students.txt");

    let mut store = RecordStore::new();
    store.add("101", "Asha", "CS");
    store.add("102", "Ravi", "EE");

    store.save_to_file(&path).unwrap();

    // Most recently added first
    assert_eq!(read_lines(&path), vec!["102 | Ravi | EE", "101 | Asha | CS"]);
}

#[test]
fn test_save_then_load_round_trips_with_reversal() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("students.txt");

    let mut store = RecordStore::new();
    store.add("101", "Asha", "CS");
    store.add("102", "Ravi", "EE");
    store.save_to_file(&path).unwrap();

    // Loading re-prepends line by line, so the order flips back
    let mut reloaded = RecordStore::new();
    reloaded.load_from_file(&path).unwrap();
    let rolls: Vec<&str> = reloaded.iter().map(|r| r.roll_number.as_str()).collect();
    assert_eq!(rolls, vec!["101", "102"]);
}

#[test]
fn test_save_does_not_trim_stored_fields() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("students.txt");

    let mut store = RecordStore::new();
    store.add(" 101 ", "Asha", "CS");

    store.save_to_file(&path).unwrap();

    assert_eq!(read_lines(&path), vec![" 101  | Asha | CS"]);
}
