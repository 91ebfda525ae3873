// SPDX-License-Identifier: MPL-2.0
//! Key/value stores.
//!
//! [`FileStore`] keeps every entry in one CBOR map (`state.cbor` in the
//! application data directory) and rewrites the file on each `set`.
//! [`MemoryStore`] is the same contract without persistence.

use crate::app::paths;
use crate::application::port::{KeyValueStore, StorageError};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// State file name within the app data directory.
pub const STATE_FILE: &str = "state.cbor";

/// CBOR-file backed store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens `state.cbor` in the data directory (or `base_dir` when given).
    ///
    /// Returns the store plus a warning when an existing file could not be
    /// read; the store then starts empty. Returns `None` when no data
    /// directory can be determined.
    pub fn open_default(base_dir: Option<PathBuf>) -> Option<(Self, Option<String>)> {
        let dir = paths::get_app_data_dir_with_override(base_dir)?;
        Some(Self::open(dir.join(STATE_FILE)))
    }

    /// Opens the store at `path`.
    pub fn open(path: PathBuf) -> (Self, Option<String>) {
        let (values, warning) = if path.exists() {
            match read_map(&path) {
                Ok(values) => (values, None),
                Err(err) => (BTreeMap::new(), Some(format!("{}: {}", path.display(), err))),
            }
        } else {
            (BTreeMap::new(), None)
        };
        let store = Self {
            path,
            values: Mutex::new(values),
        };
        (store, warning)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let file = fs::File::open(path)?;
    let map = ciborium::from_reader(BufReader::new(file))?;
    Ok(map)
}

fn write_map(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(path)?);
    ciborium::into_writer(values, &mut writer)?;
    writer.flush()?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        write_map(&self.path, &values).map_err(|err| match err {
            Error::Storage(msg) => StorageError::Encode(msg),
            other => StorageError::Write(other.to_string()),
        })
    }
}

/// Non-persistent store, used when no data directory is available and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.values
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(STATE_FILE);

        let (store, warning) = FileStore::open(path.clone());
        assert!(warning.is_none());
        store.set("preferred-language", "mr").expect("write succeeds");

        let (reopened, warning) = FileStore::open(path);
        assert!(warning.is_none());
        assert_eq!(reopened.get("preferred-language").as_deref(), Some("mr"));
    }

    #[test]
    fn corrupt_file_starts_empty_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(STATE_FILE);
        fs::write(&path, b"definitely not cbor").expect("write");

        let (store, warning) = FileStore::open(path);
        assert!(warning.is_some());
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn open_default_respects_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (store, _) =
            FileStore::open_default(Some(temp_dir.path().to_path_buf())).expect("dir resolves");
        assert_eq!(store.path(), temp_dir.path().join(STATE_FILE));
    }

    #[test]
    fn unwritable_location_reports_error_but_keeps_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, b"x").expect("write");
        // The parent of the state file is a regular file, so creation fails.
        let (store, _) = FileStore::open(blocker.join(STATE_FILE));

        assert!(matches!(store.set("k", "v"), Err(StorageError::Write(_))));
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").expect("write succeeds");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
