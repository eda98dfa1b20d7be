//! String-keyed storage gateway
//!
//! The profile is persisted through a LocalStorage-shaped interface: string
//! keys, string values, last-write-wins. Malformed or missing data is never
//! fatal; readers fall back to defaults. Two backends:
//! - `MemoryStore` for tests and headless runs
//! - `FileStore`, a single JSON object on disk, rewritten on every set

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value persistence boundary (the only external resource in the core)
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Volatile in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: the whole keyed map serialized as one JSON object
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`. A missing or unreadable file yields an empty
    /// store; readers see defaults.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!("ignoring malformed store {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to serialize store: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            log::error!("failed to write {}: {err}", self.path.display());
        }
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("score"), None);
        store.set("score", "12");
        assert_eq!(store.get("score").as_deref(), Some("12"));
        store.set("score", "13");
        assert_eq!(store.get("score").as_deref(), Some("13"));
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");

        let mut store = FileStore::open(&path);
        store.set("currency", "7");
        drop(store);

        let store = FileStore::open(&path);
        assert_eq!(store.get("currency").as_deref(), Some("7"));
    }

    #[test]
    fn test_file_store_tolerates_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("currency"), None);
    }
}
