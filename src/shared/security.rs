//! File access guards shared by the readers, writers and stores.

use crate::shared::error::LedgerError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Maximum size of any file the ledger will read (50 MB).
/// Carrier commission reports are a few thousand rows at most.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Reads a file to a string after checking that it is a regular file,
/// not a symbolic link, and within [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - The file to read
/// * `description` - Human-readable file kind for error messages (e.g., "commission report")
pub fn read_regular_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| LedgerError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(LedgerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is a symbolic link", description),
            hint: "Pass the path of the real file instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(LedgerError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", path.display()),
        }
        .into());
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(LedgerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "The {} is too large ({} bytes). Maximum allowed size is {} bytes",
                description,
                metadata.len(),
                MAX_FILE_SIZE
            ),
            hint: "Split the report into smaller files and import them one by one".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        LedgerError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Rejects write targets that already exist as symbolic links.
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(LedgerError::SecurityError {
            path: path.to_path_buf(),
            reason: "Writing through a symbolic link is not allowed".to_string(),
            hint: "Choose an output path that is not a link".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Writes `contents` to a temporary file next to `path`, then renames it
/// over `path`. Readers see either the old file or the new one.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_not_symlink(path)?;

    let write_error = |details: String| LedgerError::FileWriteError {
        path: path.to_path_buf(),
        details,
    };

    let parent = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_error(e.to_string()))?;
    temp.write_all(contents)
        .map_err(|e| write_error(e.to_string()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| write_error(e.to_string()))?;
    temp.persist(path)
        .map_err(|e| write_error(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.csv");
        fs::write(&file_path, "ServiceNumber\n5551234\n").unwrap();

        let content = read_regular_file(&file_path, "commission report").unwrap();
        assert_eq!(content, "ServiceNumber\n5551234\n");
    }

    #[test]
    fn test_read_regular_file_missing() {
        let path = PathBuf::from("/nonexistent/report.csv");
        let err = read_regular_file(&path, "commission report").unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_regular_file(temp_dir.path(), "commission report").unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.csv");
        let link = temp_dir.path().join("link.csv");
        fs::write(&target, "x").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = read_regular_file(&link, "commission report").unwrap_err();
        assert!(err.to_string().contains("Security violation"));
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_not_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(ensure_not_symlink(&target).is_ok());
        assert!(ensure_not_symlink(&temp_dir.path().join("absent.json")).is_ok());
        assert!(ensure_not_symlink(&link).is_err());
    }

    #[test]
    fn test_write_atomically_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(&path, "old").unwrap();

        write_atomically(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomically_missing_parent() {
        let path = PathBuf::from("/nonexistent/dir/ledger.json");
        let err = write_atomically(&path, b"{}").unwrap_err();
        assert!(err.to_string().contains("Failed to write to file"));
    }
}
