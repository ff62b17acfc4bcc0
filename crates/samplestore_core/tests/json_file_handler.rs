use samplestore_core::{JsonFileHandler, RepoError};
use std::fs;
use tempfile::TempDir;

#[test]
fn create_initializes_the_file_with_an_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("repo.json");

    let handler = JsonFileHandler::create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(handler.load().unwrap(), "[]");
    assert_eq!(handler.path(), path.as_path());
}

#[test]
fn create_refuses_an_occupied_path_without_touching_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("repo.json");
    fs::write(&path, "precious").unwrap();

    let err = JsonFileHandler::create(&path).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists(ref p) if p == &path));
    assert_eq!(fs::read_to_string(&path).unwrap(), "precious");
}

#[test]
fn save_overwrites_the_whole_payload() {
    let dir = TempDir::new().unwrap();
    let handler = JsonFileHandler::create(dir.path().join("repo.json")).unwrap();

    handler.save("[1,2,3]").unwrap();
    assert_eq!(handler.load().unwrap(), "[1,2,3]");

    handler.save("[]").unwrap();
    assert_eq!(handler.load().unwrap(), "[]");
}

#[test]
fn delete_removes_the_file_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("repo.json");
    let handler = JsonFileHandler::create(&path).unwrap();

    handler.delete().unwrap();
    assert!(!path.exists());

    // A second delete on the already-absent file is not an error.
    handler.delete().unwrap();
}

#[test]
fn open_requires_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let err = JsonFileHandler::open(&missing).unwrap_err();
    assert!(matches!(err, RepoError::Io(_)));

    let path = dir.path().join("repo.json");
    JsonFileHandler::create(&path).unwrap();
    let reopened = JsonFileHandler::open(&path).unwrap();
    assert_eq!(reopened.load().unwrap(), "[]");
}
