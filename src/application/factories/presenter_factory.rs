use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use crate::shared::error::LedgerError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Where a command's rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    /// Reads the `--output` flag: a path means a file, none means stdout
    pub fn from_flag(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => OutputDestination::File(path),
            None => OutputDestination::Stdout,
        }
    }
}

/// PresenterFactory picks the presenter for exports and views.
///
/// Views always go to stdout. Exports follow `--output`, but never onto the
/// file that holds the ledger itself.
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn for_view() -> Box<dyn OutputPresenter> {
        Box::new(StdoutPresenter::new())
    }

    /// Builds the presenter for an export.
    ///
    /// `store_location` is the active store's location. An export file at
    /// the same path would overwrite the ledger with export text and is
    /// refused.
    ///
    /// # Examples
    /// ```
    /// use commission_ledger::application::factories::{OutputDestination, PresenterFactory};
    ///
    /// let presenter = PresenterFactory::for_export(OutputDestination::Stdout, "commission_data.json");
    /// assert!(presenter.is_ok());
    /// ```
    pub fn for_export(
        destination: OutputDestination,
        store_location: &str,
    ) -> Result<Box<dyn OutputPresenter>> {
        match destination {
            OutputDestination::Stdout => Ok(Box::new(StdoutPresenter::new())),
            OutputDestination::File(path) => {
                if same_file(&path, Path::new(store_location)) {
                    return Err(LedgerError::FileWriteError {
                        path,
                        details: "Export output is the ledger store itself".to_string(),
                    }
                    .into());
                }
                Ok(Box::new(FileSystemWriter::new(path)))
            }
        }
    }
}

/// Compares canonical paths when both exist, the literal paths otherwise
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
