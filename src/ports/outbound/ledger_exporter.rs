use crate::ledger::domain::Ledger;
use crate::shared::Result;

/// LedgerExporter port for rendering the whole ledger in an export format
///
/// This port abstracts the formatting logic for the supported export
/// formats (CSV, JSON dump, Markdown report).
pub trait LedgerExporter {
    /// Renders the ledger
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn export(&self, ledger: &Ledger) -> Result<String>;
}
