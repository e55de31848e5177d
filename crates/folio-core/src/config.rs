//! Centralized configuration for the Folio library core.
//!
//! Endpoints and credentials are explicit inputs supplied at construction
//! time, never compiled-in constants, so the synchronizer can be pointed at
//! mock backends in tests.

use crate::error::{FolioError, Result};
use std::time::Duration;
use url::Url;

/// Environment variable names read by [`LibraryConfig::from_env`].
const ENV_CATALOG_URL: &str = "FOLIO_CATALOG_URL";
const ENV_STORAGE_URL: &str = "FOLIO_STORAGE_URL";
const ENV_API_KEY: &str = "FOLIO_API_KEY";
const ENV_BUCKET: &str = "FOLIO_BUCKET";

/// Connection settings for the two remote services.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Base address of the document catalog.
    pub catalog_base_url: Url,
    /// Base address of the object store.
    pub storage_base_url: Url,
    /// Credential sent as `apikey` and bearer token on catalog calls,
    /// bearer-only on store calls.
    pub api_key: String,
    /// Object-store bucket holding uploaded documents.
    pub bucket: String,
}

impl LibraryConfig {
    /// Create a config from explicit values, validating both base URLs.
    pub fn new(
        catalog_base_url: &str,
        storage_base_url: &str,
        api_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            catalog_base_url: parse_base_url(catalog_base_url)?,
            storage_base_url: parse_base_url(storage_base_url)?,
            api_key: api_key.into(),
            bucket: bucket.into(),
        })
    }

    /// Read the config from `FOLIO_CATALOG_URL`, `FOLIO_STORAGE_URL`,
    /// `FOLIO_API_KEY` and `FOLIO_BUCKET`.
    pub fn from_env() -> Result<Self> {
        Self::new(
            &require_env(ENV_CATALOG_URL)?,
            &require_env(ENV_STORAGE_URL)?,
            require_env(ENV_API_KEY)?,
            require_env(ENV_BUCKET)?,
        )
    }

    /// Catalog base address without a trailing slash.
    pub fn catalog_base(&self) -> &str {
        self.catalog_base_url.as_str().trim_end_matches('/')
    }

    /// Store base address without a trailing slash.
    pub fn storage_base(&self) -> &str {
        self.storage_base_url.as_str().trim_end_matches('/')
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| FolioError::Config {
        message: format!("Invalid base URL {:?}: {}", raw, e),
    })
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| FolioError::Config {
        message: format!("Missing environment variable {}", name),
    })
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    /// Uploads carry whole file bodies and get a longer bound.
    pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);
    pub const USER_AGENT: &'static str = "folio-library/1.0";
}

/// Object-store document settings.
pub struct StorageConfig;

impl StorageConfig {
    /// Content type declared for every uploaded document.
    pub const DOCUMENT_CONTENT_TYPE: &'static str = "application/pdf";
    /// Extension used for storage keys when the original name has none.
    pub const FALLBACK_EXTENSION: &'static str = "bin";
}
