//! Library management - in-memory item list synchronized with remote backends.
//!
//! # Architecture
//!
//! ```text
//! LibrarySync (in-memory ordered list)
//!     │
//!     ├── DocumentCatalog - structured rows: list + insert
//!     │
//!     ├── ObjectStore - binary blobs: upload + public URL
//!     │
//!     └── keys - timestamp-derived storage keys and local ids
//! ```

mod catalog;
mod keys;
mod object_store;
mod sync;
mod types;

pub use catalog::{DocumentCatalog, HttpDocumentCatalog};
pub use keys::{file_extension, next_timestamp_id, storage_key};
pub use object_store::{HttpObjectStore, ObjectStore};
pub use sync::LibrarySync;
pub use types::{CatalogRecord, ItemKind, LibraryItem, LocalFile, NewDocument};
