//! Document catalog backend.
//!
//! The catalog is a record store keyed by item id, holding title, retrieval
//! URL and type. It supports listing all records and inserting one record
//! with the created representation returned.

use crate::config::LibraryConfig;
use crate::error::{FolioError, Result};
use crate::library::types::{CatalogRecord, NewDocument};
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Remote document catalog operations.
#[async_trait]
pub trait DocumentCatalog: Send + Sync {
    /// List all catalog records in server return order.
    async fn list(&self) -> Result<Vec<CatalogRecord>>;

    /// Insert one record and return the created representation.
    async fn insert(&self, doc: &NewDocument) -> Result<CatalogRecord>;
}

/// HTTP implementation of [`DocumentCatalog`].
pub struct HttpDocumentCatalog {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl HttpDocumentCatalog {
    pub fn new(config: &LibraryConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            base_url: config.catalog_base().to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn documents_url(&self) -> String {
        format!("{}/documents", self.base_url)
    }

    /// Credential headers carried on every catalog call.
    fn auth_headers(&self) -> Vec<(String, String)> {
        vec![
            ("apikey".to_string(), self.api_key.clone()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            ),
        ]
    }
}

#[async_trait]
impl DocumentCatalog for HttpDocumentCatalog {
    async fn list(&self) -> Result<Vec<CatalogRecord>> {
        let url = self.documents_url();
        let response = self.http.get_with_headers(&url, &self.auth_headers()).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::status("catalog list", status.as_u16()));
        }

        let records: Vec<CatalogRecord> =
            response.json().await.map_err(|e| FolioError::Json {
                message: format!("Failed to parse catalog listing: {}", e),
                source: None,
            })?;

        debug!("Catalog listed {} records", records.len());
        Ok(records)
    }

    async fn insert(&self, doc: &NewDocument) -> Result<CatalogRecord> {
        let url = self.documents_url();
        let mut headers = self.auth_headers();
        // Ask the server to echo the created row back
        headers.push((
            "Prefer".to_string(),
            "return=representation".to_string(),
        ));

        let response = self.http.post_json(&url, doc, &headers).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::status("metadata save", status.as_u16()));
        }

        // The reply is an array containing the created row
        let mut created: Vec<CatalogRecord> =
            response.json().await.map_err(|e| FolioError::Json {
                message: format!("Failed to parse created record: {}", e),
                source: None,
            })?;

        if created.is_empty() {
            return Err(FolioError::EmptyCatalogReply);
        }
        Ok(created.remove(0))
    }
}
