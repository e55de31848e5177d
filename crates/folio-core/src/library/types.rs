//! Library item types and catalog wire records.

use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Kind of document a library item points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    /// File-backed document stored in the object store.
    Pdf,
    /// Plain link reference, never uploaded.
    Link,
    /// Any other document kind the catalog may grow.
    Other(String),
}

impl ItemKind {
    /// Return the canonical wire string for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Pdf => "PDF",
            ItemKind::Link => "Link",
            ItemKind::Other(s) => s,
        }
    }

    /// Map a catalog `type` string to a kind. Unknown strings are preserved
    /// as [`ItemKind::Other`] rather than rejected.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "pdf" => ItemKind::Pdf,
            "link" => ItemKind::Link,
            _ => ItemKind::Other(name.to_string()),
        }
    }
}

impl From<String> for ItemKind {
    fn from(s: String) -> Self {
        ItemKind::from_name(&s)
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::str::FromStr for ItemKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ItemKind::from_name(s))
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the in-memory library list.
///
/// Invariants:
/// - `id` is unique within the live list.
/// - `kind == Link` implies `uri` is the verbatim user-supplied text.
/// - File-backed kinds imply `uri` is a public retrieval URL whose catalog
///   record was durably written before the item entered the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    /// Opaque unique identifier. Catalog-assigned for file-backed items,
    /// timestamp-derived for session-local links.
    pub id: String,
    /// Display name: original filename for uploads, raw text for links.
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Resolvable reference: public URL for uploads, raw text for links.
    pub uri: String,
}

/// Wire shape of one catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Missing or null types default to PDF when mapped to an item.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CatalogRecord {
    /// Map this record to a library item, applying the PDF default.
    pub fn into_item(self) -> LibraryItem {
        let kind = self
            .kind
            .as_deref()
            .map(ItemKind::from_name)
            .unwrap_or(ItemKind::Pdf);
        LibraryItem {
            id: self.id,
            title: self.title,
            kind,
            uri: self.url,
        }
    }
}

/// Insert body for a new catalog row.
#[derive(Debug, Clone, Serialize)]
pub struct NewDocument {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// A locally-selected file: display name plus a local-access path.
///
/// The file must be readable at call time; no size or type validation is
/// performed beyond what the picking mechanism guarantees.
#[derive(Debug, Clone)]
pub struct LocalFile {
    name: String,
    path: PathBuf,
}

impl LocalFile {
    /// Create a handle from an explicit display name and path.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a handle using the path's file name as the display name.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| FolioError::Config {
                message: format!("Path has no usable file name: {}", path.display()),
            })?
            .to_string();
        Ok(Self { name, path })
    }

    /// The original file name shown as the item title.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file's full binary content into memory.
    pub async fn read(&self) -> Result<Vec<u8>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FolioError::FileNotFound(self.path.clone()))
            }
            Err(e) => Err(FolioError::io_with_path(e, &self.path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_canonical_strings() {
        assert_eq!(ItemKind::Pdf.as_str(), "PDF");
        assert_eq!(ItemKind::Link.as_str(), "Link");
        assert_eq!(ItemKind::from_name("pdf"), ItemKind::Pdf);
        assert_eq!(ItemKind::from_name("LINK"), ItemKind::Link);
        assert_eq!(
            ItemKind::from_name("EPUB"),
            ItemKind::Other("EPUB".to_string())
        );
    }

    #[test]
    fn test_kind_serde_roundtrip() {
        let json = serde_json::to_string(&ItemKind::Pdf).unwrap();
        assert_eq!(json, "\"PDF\"");
        let back: ItemKind = serde_json::from_str("\"Link\"").unwrap();
        assert_eq!(back, ItemKind::Link);
    }

    #[test]
    fn test_record_maps_fields_verbatim() {
        let record: CatalogRecord = serde_json::from_str(
            r#"{"id":"1","title":"Doc A","url":"http://x/a","type":"PDF"}"#,
        )
        .unwrap();
        let item = record.into_item();
        assert_eq!(item.id, "1");
        assert_eq!(item.title, "Doc A");
        assert_eq!(item.kind, ItemKind::Pdf);
        assert_eq!(item.uri, "http://x/a");
    }

    #[test]
    fn test_record_without_type_defaults_to_pdf() {
        let record: CatalogRecord =
            serde_json::from_str(r#"{"id":"2","title":"Doc B","url":"http://x/b"}"#).unwrap();
        assert_eq!(record.into_item().kind, ItemKind::Pdf);
    }

    #[test]
    fn test_new_document_wire_shape() {
        let doc = NewDocument {
            title: "notes.pdf".into(),
            url: "http://x/objects/public/documents/1.pdf".into(),
            kind: ItemKind::Pdf,
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["title"], "notes.pdf");
        assert_eq!(json["type"], "PDF");
    }

    #[tokio::test]
    async fn test_local_file_read_missing() {
        let file = LocalFile::new("gone.pdf", "/nonexistent/gone.pdf");
        let err = file.read().await.unwrap_err();
        assert!(matches!(err, FolioError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_local_file_read_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = LocalFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "notes.pdf");
        assert_eq!(file.read().await.unwrap(), b"%PDF-1.4");
    }
}
