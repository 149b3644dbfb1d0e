use super::ledger_document::{from_documents, to_documents, LedgerDocuments};
use crate::ledger::domain::Ledger;
use crate::ports::outbound::LedgerStore;
use crate::shared::error::LedgerError;
use crate::shared::Result;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;

/// HttpDocumentStore keeps the ledger in a remote document collection.
///
/// The remote side speaks a minimal REST protocol:
/// - `GET {base}/{collection}` returns an object of documents keyed by id
/// - `PUT {base}/{collection}/{id}` overwrites one document
/// - `DELETE {base}/{collection}/{id}` removes one document
/// - `DELETE {base}/{collection}` removes every document
///
/// Ids are URL-encoded service numbers. A collection that does not exist
/// (404) is an empty ledger.
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
    collection: String,
    max_retries: u32,
}

impl HttpDocumentStore {
    pub fn new(base_url: &str, collection: &str) -> Result<Self> {
        Self::validate_collection(collection)?;

        let user_agent = format!("commission-ledger/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            max_retries: 3,
        })
    }

    /// Collection names become a URL path segment, so separators and
    /// URL syntax characters are rejected
    fn validate_collection(collection: &str) -> Result<()> {
        let invalid = collection.is_empty()
            || collection.contains("..")
            || collection
                .chars()
                .any(|c| matches!(c, '/' | '\\' | '#' | '?' | '@') || c.is_whitespace());

        if invalid {
            return Err(LedgerError::Validation {
                message: format!(
                    "Invalid collection name '{}'. Use letters, digits, '-' or '_'",
                    collection
                ),
            }
            .into());
        }
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn document_url(&self, service_number: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            urlencoding::encode(service_number)
        )
    }

    fn store_error(&self, details: impl Into<String>) -> LedgerError {
        LedgerError::StoreError {
            location: self.location(),
            details: details.into(),
        }
    }

    fn ensure_success(&self, response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(self
            .store_error(format!("{} returned status code {}", action, status))
            .into())
    }

    fn fetch_documents(&self) -> Result<LedgerDocuments> {
        let url = self.collection_url();
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.store_error(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(LedgerDocuments::new());
        }

        let response = self.ensure_success(response, "GET collection")?;
        let documents = response
            .json::<LedgerDocuments>()
            .map_err(|e| self.store_error(format!("Invalid collection payload: {}", e)))?;
        Ok(documents)
    }

    /// Fetches the collection, retrying transient failures
    fn fetch_with_retry(&self) -> Result<LedgerDocuments> {
        let mut attempt = 1;
        loop {
            match self.fetch_documents() {
                Ok(documents) => return Ok(documents),
                Err(e) if attempt < self.max_retries => {
                    log::warn!("Fetching {} failed (attempt {}): {}", self.location(), attempt, e);
                    std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn delete(&self, url: &str, action: &str) -> Result<()> {
        let response = self
            .client
            .delete(url)
            .send()
            .map_err(|e| self.store_error(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        self.ensure_success(response, action)?;
        Ok(())
    }
}

impl LedgerStore for HttpDocumentStore {
    fn load(&self) -> Result<Ledger> {
        let documents = self.fetch_with_retry()?;
        log::debug!("Fetched {} documents from {}", documents.len(), self.location());
        from_documents(documents)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let existing = self.fetch_with_retry()?;
        let documents = to_documents(ledger);

        for (service_number, document) in &documents {
            let response = self
                .client
                .put(self.document_url(service_number))
                .json(document)
                .send()
                .map_err(|e| self.store_error(e.to_string()))?;
            self.ensure_success(response, "PUT document")?;
        }

        for stale in existing.keys().filter(|id| !documents.contains_key(*id)) {
            log::debug!("Removing stale document {}", stale);
            self.delete(&self.document_url(stale), "DELETE document")?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.delete(&self.collection_url(), "DELETE collection")
    }

    fn location(&self) -> String {
        self.collection_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let store = HttpDocumentStore::new("http://localhost:9000/", "lines").unwrap();

        assert_eq!(store.collection_url(), "http://localhost:9000/lines");
        assert_eq!(
            store.document_url("555 1234"),
            "http://localhost:9000/lines/555%201234"
        );
        assert_eq!(store.location(), "http://localhost:9000/lines");
    }

    #[test]
    fn test_rejects_unsafe_collection_names() {
        for name in ["", "a/b", "..", "lines?x=1", "my lines", "a#b"] {
            assert!(
                HttpDocumentStore::new("http://localhost:9000", name).is_err(),
                "{} should be rejected",
                name
            );
        }
        assert!(HttpDocumentStore::new("http://localhost:9000", "commission_lines-2025").is_ok());
    }

    #[test]
    fn test_unreachable_server_is_store_error() {
        let mut store = HttpDocumentStore::new("http://127.0.0.1:9", "lines").unwrap();
        store.max_retries = 1;

        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("Ledger store error"));
    }
}
