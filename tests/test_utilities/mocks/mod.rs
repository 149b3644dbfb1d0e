/// Mock implementations for testing
mod mock_confirmation_prompt;
mod mock_ledger_store;
mod mock_progress_reporter;
mod mock_report_reader;

pub use mock_confirmation_prompt::MockConfirmationPrompt;
pub use mock_ledger_store::MockLedgerStore;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_reader::MockReportReader;
