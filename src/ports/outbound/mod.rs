/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, ledger stores, console, etc.).
pub mod confirmation_prompt;
pub mod ledger_exporter;
pub mod ledger_store;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_reader;
pub mod snapshot_reader;
pub mod view_formatter;

pub use confirmation_prompt::ConfirmationPrompt;
pub use ledger_exporter::LedgerExporter;
pub use ledger_store::{LedgerStore, SharedLedgerStore};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_reader::ReportReader;
pub use snapshot_reader::SnapshotReader;
pub use view_formatter::ViewFormatter;
