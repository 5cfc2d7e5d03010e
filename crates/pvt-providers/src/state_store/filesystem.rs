//! Filesystem state store provider
//!
//! Persists the whole key space as one JSON object document on disk. Writes
//! are read-modify-write of the full document, serialized through an async
//! mutex; the tracker is a single logical writer so contention is not a
//! concern here.
//!
//! A document that fails to parse makes reads fail (callers substitute
//! their documented defaults) while writes start over from an empty
//! document, so the store heals itself on the next mutation.

use async_trait::async_trait;
use pvt_domain::error::{Error, Result};
use pvt_domain::ports::StateStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::warn;

/// Default on-disk location of the state document
pub const DEFAULT_STATE_PATH: &str = "./data/pvt-state.json";

/// The on-disk shape: a flat string-to-string object
type Document = BTreeMap<String, String>;

/// Filesystem-backed state store
#[derive(Debug)]
pub struct FilesystemStateStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the shared document
    write_lock: Mutex<()>,
}

impl FilesystemStateStore {
    /// Create a store backed by the given document path
    ///
    /// The file and its parent directory are created lazily on first write.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backing document
    ///
    /// A missing file is an empty document; an unreadable or unparseable
    /// file is an error for the caller to handle.
    async fn read_document(&self) -> Result<Document> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::storage_with_source(
                    format!("state document {} is not valid JSON", self.path.display()),
                    e,
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(Error::io_with_source(
                format!("failed to read state document {}", self.path.display()),
                e,
            )),
        }
    }

    /// Read the document for a mutation, recovering from corruption
    async fn document_for_update(&self) -> Document {
        match self.read_document().await {
            Ok(doc) => doc,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "state document unreadable, starting from an empty document"
                );
                Document::new()
            }
        }
    }

    /// Serialize and write the full document back
    async fn write_document(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(
                    format!("failed to create state directory {}", parent.display()),
                    e,
                )
            })?;
        }
        let content = serde_json::to_string_pretty(document)?;
        tokio::fs::write(&self.path, content).await.map_err(|e| {
            Error::io_with_source(
                format!("failed to write state document {}", self.path.display()),
                e,
            )
        })
    }
}

#[async_trait]
impl StateStore for FilesystemStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_document().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.document_for_update().await;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.document_for_update().await;
        let existed = document.remove(key).is_some();
        if existed {
            self.write_document(&document).await?;
        }
        Ok(existed)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.read_document().await?.contains_key(key))
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write_document(&Document::new()).await
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
