//! Durable key/value stores for the review cache

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Store file name inside the cache directory
const STORE_FILE: &str = "reviews.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key/value storage with no transactional guarantees
pub trait ReviewStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file in the site cache directory
#[derive(Debug, Clone)]
pub struct FileStore {
    cache_dir: PathBuf,
}

impl FileStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.cache_dir.join(STORE_FILE)
    }

    /// Read the whole file; a missing or unreadable file is an empty store
    fn load(&self) -> BTreeMap<String, String> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable review store {:?}: {}", path, e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        fs::create_dir_all(&self.cache_dir)?;
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(self.path(), content)?;
        Ok(())
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}

impl ReviewStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}
