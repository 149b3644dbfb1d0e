use crate::ledger::domain::Ledger;
use crate::shared::Result;
use std::path::Path;

/// SnapshotReader port for loading a ledger dump (the JSON export)
pub trait SnapshotReader {
    /// Reads and decodes the dump at the specified path
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not a
    /// ledger JSON document
    fn read_snapshot(&self, path: &Path) -> Result<Ledger>;
}
