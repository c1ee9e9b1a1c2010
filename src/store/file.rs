//! JSON-file backed store.
//!
//! The whole store is one JSON object of string keys to string values.
//! Writes hold an exclusive lock on `<file>.lock` for the read-modify-write
//! and replace the file through a rename, so a crash mid-write leaves the
//! previous contents intact. A corrupt file is renamed to `<file>.bad` on
//! the next write and replaced by a fresh map.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{KeyValueStore, StoreError};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data_dir>/hnstories/state.json`.
    ///
    /// Falls back to the current directory if data_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("hnstories").join("state.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(self.io_error(err)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Moves an unreadable store file aside so writes can start over.
    fn quarantine(&self) -> Result<(), StoreError> {
        let mut bad_path = self.path.clone().into_os_string();
        bad_path.push(".bad");
        let bad_path = PathBuf::from(bad_path);
        fs::rename(&self.path, &bad_path).map_err(|e| self.io_error(e))?;
        tracing::warn!(
            path = %self.path.display(),
            moved_to = %bad_path.display(),
            "Store file is corrupt; starting with an empty store"
        );
        Ok(())
    }

    fn lock(&self) -> Result<File, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.path.with_extension("lock"))
            .map_err(|e| self.io_error(e))?;
        lock_file.lock_exclusive().map_err(|e| self.io_error(e))?;
        Ok(lock_file)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Released when dropped at the end of the write.
        let _lock = self.lock()?;

        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Corrupt { .. }) => {
                self.quarantine()?;
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        map.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&map).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}
