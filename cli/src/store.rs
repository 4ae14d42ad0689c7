//! File-backed cart storage.
//!
//! Entries live in a small JSON object on disk, so a selection made by one
//! `rentals` invocation is seen by the next.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rentals_business::{CartStore, ConsoleError, ConsoleResult};

use crate::config::project_dirs;

#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

fn storage_error(path: &Path, action: &str, err: impl std::fmt::Display) -> ConsoleError {
    ConsoleError::Storage(format!("Failed to {action} {}: {err}", path.display()))
}

impl FileCartStore {
    /// `$XDG_DATA_HOME/rentals/cart.json` on Linux.
    pub fn default_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().join("cart.json"))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> ConsoleResult<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| storage_error(&path, "read", e))?;
            serde_json::from_str(&content).map_err(|e| storage_error(&path, "parse", e))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    fn persist(&self) -> ConsoleResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_error(parent, "create", e))?;
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| storage_error(&self.path, "serialize", e))?;
        fs::write(&self.path, content).map_err(|e| storage_error(&self.path, "write", e))
    }
}

impl CartStore for FileCartStore {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> ConsoleResult<()> {
        self.entries.insert(key.to_owned(), value);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rentals_business::CART_KEY;

    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileCartStore::open(dir.path().join("cart.json")).expect("open");
        assert_eq!(store.get(CART_KEY).expect("get"), None);
    }

    #[test]
    fn test_set_persists_across_opens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("cart.json");

        let mut store = FileCartStore::open(&path).expect("open");
        store
            .set(CART_KEY, r#"{"id":1}"#.to_owned())
            .expect("set");

        let reopened = FileCartStore::open(&path).expect("reopen");
        assert_eq!(
            reopened.get(CART_KEY).expect("get").as_deref(),
            Some(r#"{"id":1}"#)
        );
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");

        let mut store = FileCartStore::open(&path).expect("open");
        store.set(CART_KEY, "x".to_owned()).expect("set");
        store.remove(CART_KEY).expect("remove");

        let reopened = FileCartStore::open(&path).expect("reopen");
        assert_eq!(reopened.get(CART_KEY).expect("get"), None);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        fs::write(&path, "not json").expect("write");

        let err = FileCartStore::open(&path).expect_err("corrupt file");
        assert!(matches!(err, ConsoleError::Storage(_)));
    }
}
