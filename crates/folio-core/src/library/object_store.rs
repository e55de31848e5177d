//! Object store backend.
//!
//! The object store holds binary blobs addressed by bucket and key, separate
//! from the catalog's structured records. Uploads use upsert semantics so a
//! re-used key overwrites instead of failing, and the public retrieval URL is
//! computed deterministically with no discovery round trip.

use crate::config::{LibraryConfig, NetworkConfig};
use crate::error::{FolioError, Result};
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Remote binary object store operations.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload raw bytes under `key`, overwriting any existing object.
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<()>;

    /// Public retrieval URL for an object under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// HTTP implementation of [`ObjectStore`].
pub struct HttpObjectStore {
    http: HttpClient,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl HttpObjectStore {
    pub fn new(config: &LibraryConfig) -> Result<Self> {
        Ok(Self {
            // Uploads carry whole file bodies; use the longer bound.
            http: HttpClient::with_timeout(NetworkConfig::UPLOAD_TIMEOUT)?,
            base_url: config.storage_base().to_string(),
            bucket: config.bucket.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/objects/{}/{}",
            self.base_url,
            urlencoding::encode(&self.bucket),
            urlencoding::encode(key)
        )
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<()> {
        let url = self.object_url(key);
        let size = bytes.len();
        let headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            ),
            // create-or-overwrite
            ("x-upsert".to_string(), "true".to_string()),
        ];

        let response = self.http.post_bytes(&url, content_type, bytes, &headers).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::status("object upload", status.as_u16()));
        }

        debug!("Uploaded {} bytes to {}/{}", size, self.bucket, key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/objects/public/{}/{}",
            self.base_url,
            urlencoding::encode(&self.bucket),
            urlencoding::encode(key)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> HttpObjectStore {
        let config = LibraryConfig::new(
            "https://backend.example.com/rest",
            "https://backend.example.com/storage",
            "anon-key",
            "documents",
        )
        .unwrap();
        HttpObjectStore::new(&config).unwrap()
    }

    #[test]
    fn test_object_url() {
        let store = test_store();
        assert_eq!(
            store.object_url("1700000000000.pdf"),
            "https://backend.example.com/storage/objects/documents/1700000000000.pdf"
        );
    }

    #[test]
    fn test_public_url_is_deterministic() {
        let store = test_store();
        assert_eq!(
            store.public_url("1700000000000.pdf"),
            "https://backend.example.com/storage/objects/public/documents/1700000000000.pdf"
        );
    }
}
