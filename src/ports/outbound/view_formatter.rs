use crate::application::read_models::{
    LedgerSummaryView, LineDetailView, LineView, MonthlyBucketView,
};
use crate::shared::Result;

/// ViewFormatter port for rendering query results
pub trait ViewFormatter {
    fn format_summary(&self, summary: &LedgerSummaryView) -> Result<String>;

    fn format_lines(&self, lines: &[LineView]) -> Result<String>;

    fn format_line_detail(&self, detail: &LineDetailView) -> Result<String>;

    fn format_monthly(&self, buckets: &[MonthlyBucketView]) -> Result<String>;
}
