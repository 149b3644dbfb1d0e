use crate::application::dto::RestoreResponse;
use crate::ports::outbound::{LedgerStore, ProgressReporter, SnapshotReader};
use crate::shared::Result;
use std::path::Path;

/// RestoreSnapshotUseCase replaces the stored ledger with a JSON dump
pub struct RestoreSnapshotUseCase<R, S, P> {
    snapshot_reader: R,
    ledger_store: S,
    progress_reporter: P,
}

impl<R, S, P> RestoreSnapshotUseCase<R, S, P>
where
    R: SnapshotReader,
    S: LedgerStore,
    P: ProgressReporter,
{
    pub fn new(snapshot_reader: R, ledger_store: S, progress_reporter: P) -> Self {
        Self {
            snapshot_reader,
            ledger_store,
            progress_reporter,
        }
    }

    pub fn execute(&self, snapshot_path: &Path) -> Result<RestoreResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading ledger snapshot from: {}",
            snapshot_path.display()
        ));

        let ledger = self.snapshot_reader.read_snapshot(snapshot_path)?;
        self.ledger_store.save(&ledger)?;

        let response = RestoreResponse {
            lines_restored: ledger.len(),
            transactions_restored: ledger.transaction_count(),
        };
        self.progress_reporter.report_completion(&format!(
            "✅ Restored {} line(s) with {} transaction(s) into {}",
            response.lines_restored,
            response.transactions_restored,
            self.ledger_store.location()
        ));
        Ok(response)
    }
}
