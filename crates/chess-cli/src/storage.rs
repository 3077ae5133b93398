//! Saved games on disk: one JSON file per name in the save directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur when saving or loading a game file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or write the save file.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The name would not make a plain file name.
    #[error("illegal filename '{0}': it can contain only letters, numbers and underscore")]
    InvalidName(String),
}

/// Returns true if `name` is non-empty and made of letters, digits and
/// underscores only.
pub fn is_valid_save_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A directory of saved games.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Creates a store rooted at `dir`. Nothing is touched on disk until
    /// the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SaveStore { dir: dir.into() }
    }

    /// Returns the save directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file a game named `name` is stored in.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_save_name(name) {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Writes `state` under `name`, creating the directory if needed.
    pub fn save(&self, name: &str, state: &str) -> Result<PathBuf, StorageError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, state).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "game saved");
        Ok(path)
    }

    /// Reads the state stored under `name`.
    pub fn load(&self, name: &str) -> Result<String, StorageError> {
        let path = self.path_for(name)?;
        let state = fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "game read");
        Ok(state)
    }
}
