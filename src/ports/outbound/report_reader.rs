use crate::shared::Result;
use std::path::Path;

/// ReportReader port for reading commission report contents
///
/// This port abstracts the file system operations needed to load
/// a CSV commission report.
pub trait ReportReader {
    /// Reads the commission report at the specified path
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist
    /// - The file is a symbolic link, not a regular file, or too large
    /// - The file cannot be read due to permissions or I/O errors
    fn read_report(&self, path: &Path) -> Result<String>;
}
