use std::path::PathBuf;

/// ImportRequest - Internal request DTO for the import report use case
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Path to the CSV commission report
    pub report_path: PathBuf,
    /// Start from an empty ledger instead of merging into the stored one
    pub replace: bool,
}

impl ImportRequest {
    pub fn new(report_path: PathBuf, replace: bool) -> Self {
        Self {
            report_path,
            replace,
        }
    }
}
