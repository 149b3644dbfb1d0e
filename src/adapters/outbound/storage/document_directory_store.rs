use super::ledger_document::{from_documents, to_documents, LedgerDocuments, LineDocument};
use crate::ledger::domain::Ledger;
use crate::ports::outbound::LedgerStore;
use crate::shared::error::LedgerError;
use crate::shared::security::{read_regular_file, write_atomically};
use crate::shared::Result;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const DOCUMENT_EXTENSION: &str = "json";

/// DocumentDirectoryStore keeps one JSON document per line in a directory.
///
/// File names are the URL-encoded service number plus `.json`. A save
/// rewrites every line's document and removes documents of lines that are
/// no longer in the ledger.
pub struct DocumentDirectoryStore {
    directory: PathBuf,
}

impl DocumentDirectoryStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn document_path(&self, service_number: &str) -> PathBuf {
        self.directory.join(format!(
            "{}.{}",
            urlencoding::encode(service_number),
            DOCUMENT_EXTENSION
        ))
    }

    fn store_error(&self, details: impl Into<String>) -> LedgerError {
        LedgerError::StoreError {
            location: self.location(),
            details: details.into(),
        }
    }

    /// Lists `(service number, path)` for every document in the directory
    fn list_documents(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.directory.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.directory).map_err(|e| self.store_error(e.to_string()))?;
        let mut documents = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| self.store_error(e.to_string()))?.path();
            if let Some(service_number) = service_number_of(&path) {
                documents.push((service_number, path));
            }
        }
        Ok(documents)
    }
}

/// Decodes the service number from a document file name
fn service_number_of(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    urlencoding::decode(stem).ok().map(|s| s.into_owned())
}

impl LedgerStore for DocumentDirectoryStore {
    fn load(&self) -> Result<Ledger> {
        let mut documents = LedgerDocuments::new();
        for (service_number, path) in self.list_documents()? {
            let content = read_regular_file(&path, "line document")?;
            let document: LineDocument = serde_json::from_str(&content).map_err(|e| {
                self.store_error(format!("{}: {}", path.display(), e))
            })?;
            documents.insert(service_number, document);
        }

        log::debug!("Loaded {} line documents from {}", documents.len(), self.location());
        from_documents(documents)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|e| self.store_error(e.to_string()))?;

        let documents = to_documents(ledger);
        for (service_number, document) in &documents {
            let json = serde_json::to_string_pretty(document)?;
            write_atomically(&self.document_path(service_number), json.as_bytes())?;
        }

        let kept: BTreeSet<&str> = documents.keys().map(String::as_str).collect();
        for (service_number, path) in self.list_documents()? {
            if !kept.contains(service_number.as_str()) {
                log::debug!("Removing stale document {}", path.display());
                fs::remove_file(&path).map_err(|e| self.store_error(e.to_string()))?;
            }
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        for (_, path) in self.list_documents()? {
            fs::remove_file(&path).map_err(|e| self.store_error(e.to_string()))?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        format!("{}/", self.directory.display())
    }
}
