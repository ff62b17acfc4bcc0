//! Backing-file lifecycle for the JSON file backend.
//!
//! # Responsibility
//! - Own exactly one repository file: creation, raw text read/write,
//!   removal.
//!
//! # Invariants
//! - `create` refuses an occupied target path and never truncates it.
//! - A freshly created file holds the empty-collection payload and has
//!   verified read and write access.
//! - All I/O failures propagate to the caller; nothing is swallowed.

use crate::repo::sample_repo::{RepoError, RepoResult};
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const EMPTY_COLLECTION: &str = "[]";

/// Handle on the single file backing a JSON repository.
#[derive(Debug)]
pub struct JsonFileHandler {
    path: PathBuf,
}

impl JsonFileHandler {
    /// Creates the backing file at a previously unoccupied path.
    ///
    /// The file is initialized with an empty JSON array and both access
    /// modes are verified before the handler is returned.
    pub fn create(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                error!(
                    "event=json_file_create module=repo status=error error_code=already_exists path={}",
                    path.display()
                );
                return Err(RepoError::AlreadyExists(path));
            }
            Err(err) => return Err(map_io(err, &path, "write")),
        };

        file.write_all(EMPTY_COLLECTION.as_bytes())
            .map_err(|err| map_io(err, &path, "write"))?;
        drop(file);

        let handler = Self { path };
        // Read probe; a path we can write but not read back is unusable.
        handler.load()?;

        info!(
            "event=json_file_create module=repo status=ok path={}",
            handler.path.display()
        );
        Ok(handler)
    }

    /// Attaches to an existing repository file.
    pub fn open(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        if let Err(err) = fs::metadata(&path) {
            error!(
                "event=json_file_open module=repo status=error path={} error={}",
                path.display(),
                err
            );
            return Err(map_io(err, &path, "read"));
        }

        info!(
            "event=json_file_open module=repo status=ok path={}",
            path.display()
        );
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the whole file with the given payload.
    pub fn save(&self, text: &str) -> RepoResult<()> {
        fs::write(&self.path, text).map_err(|err| map_io(err, &self.path, "write"))
    }

    /// Reads the whole file as UTF-8 text.
    pub fn load(&self) -> RepoResult<String> {
        fs::read_to_string(&self.path).map_err(|err| map_io(err, &self.path, "read"))
    }

    /// Removes the backing file. Already-absent files are not an error.
    pub fn delete(&self) -> RepoResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(
                    "event=json_file_delete module=repo status=ok path={}",
                    self.path.display()
                );
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(map_io(err, &self.path, "write")),
        }
    }
}

fn map_io(err: io::Error, path: &Path, access: &'static str) -> RepoError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        RepoError::AccessDenied {
            path: path.to_path_buf(),
            access,
        }
    } else {
        RepoError::Io(err)
    }
}
