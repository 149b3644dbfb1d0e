use crate::adapters::outbound::storage::ledger_document::encode_ledger;
use crate::ledger::domain::Ledger;
use crate::ports::outbound::LedgerExporter;
use crate::shared::Result;

/// JsonExporter dumps the ledger in the shape `restore` reads back
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerExporter for JsonExporter {
    fn export(&self, ledger: &Ledger) -> Result<String> {
        encode_ledger(ledger)
    }
}
