use crate::ledger::services::SkippedRow;

/// ImportResponse - Outcome of one import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResponse {
    /// Data rows read from the report
    pub rows_read: usize,
    /// Rows left out of the ledger, with the reason
    pub skipped: Vec<SkippedRow>,
    pub lines_created: usize,
    pub lines_updated: usize,
    /// Lines in the stored ledger after the import
    pub total_lines: usize,
}

impl ImportResponse {
    pub fn rows_skipped(&self) -> usize {
        self.skipped.len()
    }

    pub fn rows_imported(&self) -> usize {
        self.rows_read - self.skipped.len()
    }
}
