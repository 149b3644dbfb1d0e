use crate::application::read_models::{
    LedgerSummaryView, LineDetailView, LineView, MonthlyBucketView,
};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonViewFormatter renders views as pretty-printed JSON, the same
/// payloads the HTTP service returns
pub struct JsonViewFormatter;

impl JsonViewFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(value)?;
        Ok(json)
    }
}

impl Default for JsonViewFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonViewFormatter {
    fn format_summary(&self, summary: &LedgerSummaryView) -> Result<String> {
        Self::to_json(summary)
    }

    fn format_lines(&self, lines: &[LineView]) -> Result<String> {
        Self::to_json(lines)
    }

    fn format_line_detail(&self, detail: &LineDetailView) -> Result<String> {
        Self::to_json(detail)
    }

    fn format_monthly(&self, buckets: &[MonthlyBucketView]) -> Result<String> {
        Self::to_json(buckets)
    }
}
