use crate::adapters::outbound::storage::{DocumentDirectoryStore, HttpDocumentStore, JsonFileStore};
use crate::application::dto::StoreBackend;
use crate::ports::outbound::SharedLedgerStore;
use crate::shared::error::LedgerError;
use crate::shared::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Default file of the `json` store
pub const DEFAULT_STORE_FILE: &str = "commission_data.json";

/// Default directory of the `documents` store
pub const DEFAULT_STORE_DIRECTORY: &str = "commission_lines";

/// Default collection of the `documents` and `remote` stores
pub const DEFAULT_COLLECTION: &str = "lines";

/// Everything needed to open a ledger store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    /// File (json) or directory (documents); defaults per backend
    pub path: Option<PathBuf>,
    /// Base URL of the remote collection service
    pub url: Option<String>,
    pub collection: Option<String>,
}

/// Factory for creating the configured ledger store
pub struct StoreFactory;

impl StoreFactory {
    pub fn create(settings: &StoreSettings) -> Result<SharedLedgerStore> {
        let store: SharedLedgerStore = match settings.backend {
            StoreBackend::Json => {
                let path = settings
                    .path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
                Arc::new(JsonFileStore::new(path))
            }
            StoreBackend::Documents => {
                let path = settings
                    .path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIRECTORY));
                Arc::new(DocumentDirectoryStore::new(path))
            }
            StoreBackend::Remote => {
                let url = settings.url.as_deref().ok_or_else(|| LedgerError::Validation {
                    message: "The remote store needs a URL (--store-url or store_url in the config file)"
                        .to_string(),
                })?;
                let collection = settings.collection.as_deref().unwrap_or(DEFAULT_COLLECTION);
                Arc::new(HttpDocumentStore::new(url, collection)?)
            }
        };

        log::debug!("Using {} store at {}", settings.backend, store.location());
        Ok(store)
    }
}
