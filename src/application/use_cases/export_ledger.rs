use crate::ports::outbound::{LedgerExporter, LedgerStore};
use crate::shared::Result;

/// ExportLedgerUseCase renders the stored ledger with the chosen exporter
pub struct ExportLedgerUseCase<S> {
    ledger_store: S,
    exporter: Box<dyn LedgerExporter>,
}

impl<S: LedgerStore> ExportLedgerUseCase<S> {
    pub fn new(ledger_store: S, exporter: Box<dyn LedgerExporter>) -> Self {
        Self {
            ledger_store,
            exporter,
        }
    }

    /// Returns the rendered export; an empty ledger still produces a
    /// well-formed document
    pub fn execute(&self) -> Result<String> {
        let ledger = self.ledger_store.load()?;
        log::debug!(
            "Exporting {} line(s), {} transaction(s)",
            ledger.len(),
            ledger.transaction_count()
        );
        self.exporter.export(&ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::domain::Ledger;

    struct EmptyStore;

    impl LedgerStore for EmptyStore {
        fn load(&self) -> Result<Ledger> {
            Ok(Ledger::new())
        }

        fn save(&self, _ledger: &Ledger) -> Result<()> {
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            Ok(())
        }

        fn location(&self) -> String {
            "empty".to_string()
        }
    }

    struct CountingExporter;

    impl LedgerExporter for CountingExporter {
        fn export(&self, ledger: &Ledger) -> Result<String> {
            Ok(format!("{} lines", ledger.len()))
        }
    }

    #[test]
    fn test_export_uses_injected_exporter() {
        let use_case = ExportLedgerUseCase::new(EmptyStore, Box::new(CountingExporter));
        assert_eq!(use_case.execute().unwrap(), "0 lines");
    }
}
