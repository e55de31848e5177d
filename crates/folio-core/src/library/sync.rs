//! Core library synchronizer.
//!
//! `LibrarySync` keeps an in-memory ordered list of library items consistent
//! with the remote document catalog and object store. The list is the only
//! shared mutable resource; every mutation happens under the write lock, so
//! interleaved completions of concurrent operations serialize cleanly:
//! appends from two in-flight uploads both survive, a reload replaces the
//! list wholesale (last write wins).
//!
//! Callers only ever receive cloned snapshots for rendering.

use crate::config::{LibraryConfig, StorageConfig};
use crate::error::Result;
use crate::library::catalog::{DocumentCatalog, HttpDocumentCatalog};
use crate::library::keys::{next_timestamp_id, storage_key};
use crate::library::object_store::{HttpObjectStore, ObjectStore};
use crate::library::types::{ItemKind, LibraryItem, LocalFile, NewDocument};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Synchronizes the in-memory library list with the remote backends.
pub struct LibrarySync {
    catalog: Arc<dyn DocumentCatalog>,
    store: Arc<dyn ObjectStore>,
    items: RwLock<Vec<LibraryItem>>,
}

impl LibrarySync {
    /// Create a synchronizer backed by the HTTP catalog and object store.
    pub fn new(config: &LibraryConfig) -> Result<Self> {
        Ok(Self::with_backends(
            Arc::new(HttpDocumentCatalog::new(config)?),
            Arc::new(HttpObjectStore::new(config)?),
        ))
    }

    /// Create a synchronizer over arbitrary backend implementations.
    pub fn with_backends(
        catalog: Arc<dyn DocumentCatalog>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            catalog,
            store,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current item list, in display order.
    pub async fn items(&self) -> Vec<LibraryItem> {
        self.items.read().await.clone()
    }

    /// Replace the item list with the catalog's current contents.
    ///
    /// On failure the list keeps its prior value (empty on first load); the
    /// failure is logged and returned, and callers may ignore it to keep the
    /// previous view displayed.
    pub async fn load_library(&self) -> Result<Vec<LibraryItem>> {
        let records = match self.catalog.list().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Library load failed, keeping previous items: {}", e);
                return Err(e);
            }
        };

        let mapped: Vec<LibraryItem> = records.into_iter().map(|r| r.into_item()).collect();

        let mut items = self.items.write().await;
        *items = mapped;
        debug!("Loaded {} items from catalog", items.len());
        Ok(items.clone())
    }

    /// Upload a local file, record it in the catalog, and append the
    /// resulting item.
    ///
    /// The three remote steps are strictly sequential with no rollback:
    /// upload happens before the catalog insert, and the insert before the
    /// local append; later steps never run if an earlier one failed. A failed
    /// insert leaves the uploaded object orphaned in the store; nothing
    /// reconciles it, but the error names the failing stage so the caller can
    /// tell "file not stored" from "stored but not recorded".
    pub async fn add_file_item(&self, file: &LocalFile) -> Result<Vec<LibraryItem>> {
        let key = storage_key(file.name());
        let bytes = file.read().await?;

        self.store
            .put(&key, StorageConfig::DOCUMENT_CONTENT_TYPE, bytes)
            .await?;

        let public_url = self.store.public_url(&key);
        let doc = NewDocument {
            title: file.name().to_string(),
            url: public_url,
            kind: ItemKind::Pdf,
        };
        let record = self.catalog.insert(&doc).await?;
        let item = record.into_item();

        debug!("Stored {} as {} (id {})", file.name(), key, item.id);
        let mut items = self.items.write().await;
        items.push(item);
        Ok(items.clone())
    }

    /// Append a session-local link item.
    ///
    /// Blank input (empty or whitespace-only) is a silent no-op. No remote
    /// call is made; link items live only for the session and are never
    /// persisted to the catalog.
    pub async fn add_link_item(&self, text: &str) -> Result<Vec<LibraryItem>> {
        if text.trim().is_empty() {
            return Ok(self.items().await);
        }

        let item = LibraryItem {
            id: next_timestamp_id().to_string(),
            title: text.to_string(),
            kind: ItemKind::Link,
            uri: text.to_string(),
        };

        let mut items = self.items.write().await;
        items.push(item);
        Ok(items.clone())
    }
}
