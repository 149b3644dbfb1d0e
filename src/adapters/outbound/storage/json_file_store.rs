use super::ledger_document::{decode_ledger, encode_ledger};
use crate::ledger::domain::Ledger;
use crate::ports::outbound::LedgerStore;
use crate::shared::error::LedgerError;
use crate::shared::security::{read_regular_file, write_atomically};
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JsonFileStore keeps the whole ledger in one JSON file.
///
/// A missing file is an empty ledger. Saves replace the file atomically.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Ledger> {
        if fs::symlink_metadata(&self.path).is_err() {
            log::debug!("{} does not exist yet; starting empty", self.path.display());
            return Ok(Ledger::new());
        }

        let content = read_regular_file(&self.path, "ledger file")?;
        decode_ledger(&content).map_err(|e| {
            LedgerError::StoreError {
                location: self.location(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = encode_ledger(ledger)?;
        write_atomically(&self.path, json.as_bytes())?;
        log::debug!("Saved {} lines to {}", ledger.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LedgerError::StoreError {
                location: self.location(),
                details: e.to_string(),
            }
            .into()),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
