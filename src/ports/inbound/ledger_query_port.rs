use crate::application::read_models::{
    LedgerSummaryView, LineDetailView, LineView, MonthlyBucketView,
};
use crate::ledger::services::LineFilter;
use crate::shared::Result;

/// LedgerQueryPort - Inbound port for the read side of the ledger
///
/// Both the CLI view commands and the HTTP service answer their queries
/// through this port. Every query reads the current stored ledger.
pub trait LedgerQueryPort {
    /// KPI summary over every line
    fn summary(&self) -> Result<LedgerSummaryView>;

    /// Flattened line list, sorted by service number
    fn lines(&self, filter: &LineFilter) -> Result<Vec<LineView>>;

    /// One line with its transactions grouped by month
    ///
    /// # Errors
    /// Returns `LedgerError::LineNotFound` when the service number is unknown
    fn line_detail(&self, service_number: &str) -> Result<LineDetailView>;

    /// Commission totals per month, oldest first
    fn monthly(&self) -> Result<Vec<MonthlyBucketView>>;
}
