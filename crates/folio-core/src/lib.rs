//! Folio Core - Headless synchronization core for a document library.
//!
//! This crate keeps a local, append-only view of a user's document library
//! consistent with two remote services: a document catalog (structured rows
//! holding title, retrieval URL and type) and an object store (binary blobs
//! addressed by bucket and key). It has no UI concerns; a presentation layer
//! renders the snapshots it returns and forwards user intents.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_library::{LibraryConfig, LibrarySync, LocalFile};
//!
//! #[tokio::main]
//! async fn main() -> folio_library::Result<()> {
//!     let config = LibraryConfig::from_env()?;
//!     let sync = LibrarySync::new(&config)?;
//!
//!     // Hydrate the list from the catalog
//!     let items = sync.load_library().await?;
//!     println!("Loaded {} items", items.len());
//!
//!     // Upload a document and record it
//!     let file = LocalFile::from_path("./notes.pdf")?;
//!     let items = sync.add_file_item(&file).await?;
//!     println!("Library now has {} items", items.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod library;
pub mod network;

// Re-export commonly used types
pub use config::{LibraryConfig, NetworkConfig, StorageConfig};
pub use error::{FolioError, Result};
pub use library::{
    CatalogRecord, DocumentCatalog, HttpDocumentCatalog, HttpObjectStore, ItemKind, LibraryItem,
    LibrarySync, LocalFile, NewDocument, ObjectStore,
};
pub use network::HttpClient;
