use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The user declined a confirmation prompt; nothing was changed
    Aborted = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed report, store failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Aborted => write!(f, "Aborted (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for commission ledger operations.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Commission report not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse commission report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a CSV export of the carrier commission report")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Failed to parse ledger snapshot: {path}\nDetails: {details}\n\n💡 Hint: Pass a JSON file produced by `export --format json`")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Commission report is missing required column '{column}'\n\n💡 Hint: Required columns are ServiceNumber, Partner Comp, ActivityType, Customer Name and TRN_DATE")]
    MissingColumn { column: String },

    #[error("Malformed compensation on CSV line {line}: '{value}' (service number {service_number})\n\n💡 Hint: Partner Comp must be a currency amount such as $100.00 or -$10.00, no larger than $1,000,000,000 in either direction. Nothing was imported")]
    MalformedAmount {
        line: u64,
        service_number: String,
        value: String,
    },

    #[error("Service number not found: {service_number}\n\n💡 Hint: Use the `lines` command to list known service numbers")]
    LineNotFound { service_number: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Ledger store error ({location})\nDetails: {details}")]
    StoreError { location: String, details: String },

    /// Validation error for domain values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
