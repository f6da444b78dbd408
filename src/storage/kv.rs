//! Durable key-value store
//!
//! Each named key is persisted as a JSON document at `<key>.json` under the
//! store root. Writes go to a temp file first and are renamed into place, so
//! no partially-written document is ever observable. A single internal lock
//! serializes every read-modify-write and multi-key removal, giving each
//! collection single-writer semantics within the process.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// File-backed key-value store for JSON collections
#[derive(Clone)]
pub struct KvStore {
    root: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl KvStore {
    /// Create a new store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Initialize the store (create root directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Key-value store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Read a collection. A missing key is an empty collection; a document
    /// that fails to parse is logged and treated as empty rather than
    /// propagated, so a corrupted file never makes the app unusable.
    pub async fn get_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.load_collection(key).await
    }

    /// Replace a collection atomically
    pub async fn set_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.write_document(key, items).await
    }

    /// Read-modify-write a collection under the store lock.
    ///
    /// The closure receives the current contents (empty if the key is
    /// missing or unparseable) and returns the full replacement. The lock
    /// is held across both the read and the write, so two concurrent
    /// updates cannot lose each other's changes.
    pub async fn update_collection<T, F>(&self, key: &str, f: F) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(Vec<T>) -> Vec<T>,
    {
        let _guard = self.lock.lock().await;

        let current = self.load_collection(key).await?;
        let updated = f(current);
        self.write_document(key, &updated).await?;

        Ok(updated)
    }

    /// Read a single value. Missing key is `None`; a malformed document is
    /// an error here — scalar values (credentials) must not silently
    /// degrade to absent.
    pub async fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let _guard = self.lock.lock().await;

        match self.read_document(key).await? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    /// Write a single value atomically
    pub async fn set_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.write_document(key, value).await
    }

    /// Remove a key. Removing an absent key succeeds.
    pub async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.remove_file(key).await
    }

    /// Remove several keys under one lock acquisition, so a reader never
    /// observes a partially-cleared set of collections.
    pub async fn clear(&self, keys: &[&str]) -> Result<()> {
        let _guard = self.lock.lock().await;

        for key in keys {
            self.remove_file(key).await?;
        }

        tracing::info!("Cleared {} storage keys", keys.len());
        Ok(())
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    async fn read_document(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(e)),
        }
    }

    async fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(content) = self.read_document(key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!("Malformed document for key {:?}, treating as empty: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    async fn write_document<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        let path = self.path_for(key);

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;

        // Rename to final location
        fs::rename(temp_path, &path).await?;

        tracing::debug!("Wrote key {:?} ({} bytes)", key, content.len());
        Ok(())
    }

    async fn remove_file(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Removed key {:?}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}
