/// Use cases module containing application business logic orchestration
mod clear_ledger;
mod export_ledger;
mod import_report;
mod query_ledger;
mod restore_snapshot;

pub use clear_ledger::ClearLedgerUseCase;
pub use export_ledger::ExportLedgerUseCase;
pub use import_report::ImportReportUseCase;
pub use query_ledger::QueryLedgerUseCase;
pub use restore_snapshot::RestoreSnapshotUseCase;

/// Question asked before the stored ledger is cleared
pub const CLEAR_CONFIRMATION_QUESTION: &str = "Are you sure you want to clear all saved data?";
