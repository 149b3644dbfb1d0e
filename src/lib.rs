//! commission-ledger - commission tracking for wireless carrier sales
//!
//! This library ingests carrier commission reports (CSV), folds them into a
//! per-line ledger, and derives KPIs and monthly totals from it, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`ledger`): Line records, transactions and pure services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use commission_ledger::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let store = Arc::new(JsonFileStore::new("commission_data.json"));
//!
//! let import = ImportReportUseCase::new(
//!     FileSystemReader::new(),
//!     store.clone(),
//!     StderrProgressReporter::new(),
//! );
//! import.execute(ImportRequest::new(PathBuf::from("report.csv"), false))?;
//!
//! let summary = QueryLedgerUseCase::new(store).summary()?;
//! println!("{}", TextViewFormatter::plain().format_summary(&summary)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ledger;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdinConfirmationPrompt};
    pub use crate::adapters::outbound::exporters::{CsvExporter, JsonExporter, MarkdownExporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonViewFormatter, TextViewFormatter};
    pub use crate::adapters::outbound::storage::{
        DocumentDirectoryStore, HttpDocumentStore, JsonFileStore,
    };
    pub use crate::application::dto::{
        ClearOutcome, ExportFormat, ImportRequest, ImportResponse, RestoreResponse, StoreBackend,
        ViewFormat,
    };
    pub use crate::application::read_models::{
        LedgerSummaryView, LineDetailView, LineView, MonthlyBucketView,
    };
    pub use crate::application::use_cases::{
        ClearLedgerUseCase, ExportLedgerUseCase, ImportReportUseCase, QueryLedgerUseCase,
        RestoreSnapshotUseCase,
    };
    pub use crate::ledger::domain::{
        ActivityType, Ledger, LineRecord, LineStatus, ServiceNumber, Transaction,
    };
    pub use crate::ledger::services::{KpiCalculator, LineFilter, MonthlyBucketer};
    pub use crate::ports::inbound::LedgerQueryPort;
    pub use crate::ports::outbound::{
        ConfirmationPrompt, LedgerExporter, LedgerStore, OutputPresenter, ProgressReporter,
        ReportReader, SnapshotReader, ViewFormatter,
    };
    pub use crate::shared::Result;
}
