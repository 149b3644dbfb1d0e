pub mod ledger;
pub mod line_record;
pub mod report_metadata;
pub mod service_number;
pub mod transaction;

pub use ledger::{Ledger, LedgerEntry, RecordOutcome};
pub use line_record::{LineRecord, LineStatus};
pub use report_metadata::ReportMetadata;
pub use service_number::ServiceNumber;
pub use transaction::{amount_in_range, ActivityType, Transaction, MAX_AMOUNT};
