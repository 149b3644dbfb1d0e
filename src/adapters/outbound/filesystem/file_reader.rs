use crate::adapters::outbound::storage::ledger_document::decode_ledger;
use crate::ledger::domain::Ledger;
use crate::ports::outbound::{ReportReader, SnapshotReader};
use crate::shared::error::LedgerError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading commission reports and ledger
/// dumps from disk
///
/// Reads go through the shared file guards: symbolic links, non-regular
/// files and oversize files are rejected before any byte is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(LedgerError::ReportNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Please pass the path of a CSV commission report exported from the carrier portal.",
                    path.display()
                ),
            }
            .into());
        }

        log::debug!("Reading commission report from {}", path.display());
        read_regular_file(path, "commission report")
    }
}

impl SnapshotReader for FileSystemReader {
    fn read_snapshot(&self, path: &Path) -> Result<Ledger> {
        if !path.exists() {
            return Err(LedgerError::FileReadError {
                path: path.to_path_buf(),
                details: "Snapshot file does not exist".to_string(),
            }
            .into());
        }

        let content = read_regular_file(path, "ledger snapshot")?;
        decode_ledger(&content).map_err(|e| {
            LedgerError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_report_success() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("report.csv");
        fs::write(&report_path, "ServiceNumber,Partner Comp\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_report(&report_path).unwrap();

        assert_eq!(content, "ServiceNumber,Partner Comp\n");
    }

    #[test]
    fn test_read_report_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(&temp_dir.path().join("missing.csv"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Commission report not found"));
        assert!(err_string.contains("missing.csv"));
    }

    #[test]
    fn test_read_report_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_report_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("report.csv");
        let link = temp_dir.path().join("link.csv");
        fs::write(&target, "content").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(&link);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Security violation"));
    }

    #[test]
    fn test_read_snapshot_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");
        fs::write(
            &path,
            r#"{"5551234":{"customerName":"Jane Doe","plan":"","status":"Active","activationDate":"2025-01-15","history":[{"amount":"100.00","type":"ACT","description":"","date":"2025-01-15"}]}}"#,
        )
        .unwrap();

        let ledger = FileSystemReader::new().read_snapshot(&path).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("5551234").unwrap().customer_name(), "Jane Doe");
    }

    #[test]
    fn test_read_snapshot_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");
        fs::write(&path, "ServiceNumber,Partner Comp\n").unwrap();

        let err = FileSystemReader::new().read_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("Not a ledger JSON document"));
    }

    #[test]
    fn test_read_snapshot_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemReader::new()
            .read_snapshot(&temp_dir.path().join("absent.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Snapshot file does not exist"));
    }
}
