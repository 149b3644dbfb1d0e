use crate::application::dto::{ImportRequest, ImportResponse};
use crate::ledger::domain::Ledger;
use crate::ledger::services::{LedgerAggregator, PreparedRows, ReportParser, ReportRow};
use crate::ports::outbound::{LedgerStore, ProgressReporter, ReportReader};
use crate::shared::error::LedgerError;
use crate::shared::Result;
use std::path::Path;

/// ImportReportUseCase - Core use case for ingesting a commission report
///
/// Reads the CSV report, folds its rows into the stored ledger and saves
/// the result. A report with a malformed amount is rejected before the
/// store is touched.
///
/// # Type Parameters
/// * `R` - ReportReader implementation
/// * `S` - LedgerStore implementation
/// * `P` - ProgressReporter implementation
pub struct ImportReportUseCase<R, S, P> {
    report_reader: R,
    ledger_store: S,
    progress_reporter: P,
}

impl<R, S, P> ImportReportUseCase<R, S, P>
where
    R: ReportReader,
    S: LedgerStore,
    P: ProgressReporter,
{
    /// Creates a new ImportReportUseCase with injected dependencies
    pub fn new(report_reader: R, ledger_store: S, progress_reporter: P) -> Self {
        Self {
            report_reader,
            ledger_store,
            progress_reporter,
        }
    }

    /// Executes the import
    ///
    /// # Returns
    /// Counts describing what the import changed
    pub fn execute(&self, request: ImportRequest) -> Result<ImportResponse> {
        // Step 1: Read and parse the report
        let rows = self.read_and_parse_report(&request.report_path)?;
        let rows_read = rows.len();

        // Step 2: Convert rows to ledger entries; fails on a malformed amount
        let PreparedRows { entries, skipped } = LedgerAggregator::prepare(rows)?;
        for row in &skipped {
            self.progress_reporter.report_warning(&format!(
                "Skipped CSV line {}: {}",
                row.line, row.reason
            ));
        }

        // Step 3: Merge into the stored ledger (or a fresh one)
        let mut ledger = self.load_base_ledger(request.replace)?;
        let merge = LedgerAggregator::merge(&mut ledger, entries, |done, total| {
            self.progress_reporter
                .report_progress(done, total, Some("Recording transactions"));
        });

        // Step 4: Persist
        self.ledger_store.save(&ledger)?;
        log::info!(
            "Imported {} transaction(s) into {}",
            merge.transactions_recorded,
            self.ledger_store.location()
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Imported {} transaction(s): {} new line(s), {} updated line(s), {} line(s) in ledger",
            merge.transactions_recorded,
            merge.lines_opened,
            merge.lines_updated,
            ledger.len()
        ));

        Ok(ImportResponse {
            rows_read,
            skipped,
            lines_created: merge.lines_opened,
            lines_updated: merge.lines_updated,
            total_lines: ledger.len(),
        })
    }

    /// Reads the report and parses its rows, reporting progress
    fn read_and_parse_report(&self, path: &Path) -> Result<Vec<ReportRow>> {
        self.progress_reporter.report(&format!(
            "📖 Loading commission report from: {}",
            path.display()
        ));

        let content = self.report_reader.read_report(path)?;
        let rows = ReportParser::parse(&content).map_err(|e| {
            match e.downcast::<LedgerError>() {
                Ok(ledger_error) => ledger_error.into(),
                Err(other) => anyhow::Error::from(LedgerError::ReportParseError {
                    path: path.to_path_buf(),
                    details: other.to_string(),
                }),
            }
        })?;

        self.progress_reporter
            .report(&format!("✅ Read {} row(s)", rows.len()));
        Ok(rows)
    }

    fn load_base_ledger(&self, replace: bool) -> Result<Ledger> {
        if replace {
            self.progress_reporter
                .report("🧹 Replacing the stored ledger with this report");
            return Ok(Ledger::new());
        }
        self.ledger_store.load()
    }
}
