/// Integration tests for the application layer
mod test_utilities;

use commission_ledger::application::use_cases::CLEAR_CONFIRMATION_QUESTION;
use commission_ledger::prelude::*;
use commission_ledger::shared::error::LedgerError;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;

const REPORT: &str = "\
ServiceNumber,Partner Comp,ActivityType,ProdCatDescription,Customer Name,TRN_DATE
5551234,$100.00,ACT,Unlimited Plus,Jane Doe,2025-01-15
5551234,$25.50,RESIDUAL,Unlimited Plus,Jane Doe,2025-02-01
5559999,$50.00,ACT,Prepaid 40,John Smith,2025-01-20
";

const DEACT_REPORT: &str = "\
ServiceNumber,Partner Comp,ActivityType,ProdCatDescription,Customer Name,TRN_DATE
5551234,-$10.00,DEACT,Unlimited Plus,Jane Doe,2025-03-02
";

fn import(store: &MockLedgerStore, report: &str, replace: bool) -> Result<ImportResponse> {
    let use_case = ImportReportUseCase::new(
        MockReportReader::new(report),
        store.clone(),
        MockProgressReporter::new(),
    );
    use_case.execute(ImportRequest::new(PathBuf::from("report.csv"), replace))
}

#[test]
fn test_import_then_summary() {
    let store = MockLedgerStore::new();
    let response = import(&store, REPORT, false).unwrap();

    assert_eq!(response.rows_read, 3);
    assert_eq!(response.lines_created, 2);
    assert_eq!(response.total_lines, 2);

    let summary = QueryLedgerUseCase::new(store.clone()).summary().unwrap();
    assert_eq!(summary.upfront, Decimal::new(15000, 2));
    assert_eq!(summary.monthly, Decimal::new(2550, 2));
    assert_eq!(summary.chargeback, Decimal::ZERO);
    assert_eq!(summary.active_lines, 2);
}

#[test]
fn test_deactivation_flips_status_and_adds_chargeback() {
    let store = MockLedgerStore::new();
    import(&store, REPORT, false).unwrap();
    let response = import(&store, DEACT_REPORT, false).unwrap();

    assert_eq!(response.lines_created, 0);
    assert_eq!(response.lines_updated, 1);

    let query = QueryLedgerUseCase::new(store.clone());
    let summary = query.summary().unwrap();
    assert_eq!(summary.chargeback, Decimal::new(-1000, 2));
    assert_eq!(summary.active_lines, 1);
    assert_eq!(summary.inactive_lines, 1);

    let inactive = query
        .lines(&LineFilter::new(None, Some(LineStatus::Inactive)))
        .unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].service_number, "5551234");
}

#[test]
fn test_replace_discards_previous_lines() {
    let store = MockLedgerStore::new();
    import(&store, REPORT, false).unwrap();
    let response = import(&store, DEACT_REPORT, true).unwrap();

    assert_eq!(response.total_lines, 1);
    let ledger = store.snapshot();
    assert!(ledger.get("5559999").is_none());
    // Opened by a DEACT row, so no plan
    assert_eq!(ledger.get("5551234").unwrap().plan(), "");
}

#[test]
fn test_failed_read_leaves_store_untouched() {
    let store = MockLedgerStore::new();
    let use_case = ImportReportUseCase::new(
        MockReportReader::with_failure(),
        store.clone(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(ImportRequest::new(PathBuf::from("report.csv"), false));
    assert!(result.is_err());
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_save_failure_propagates() {
    let store = MockLedgerStore::failing_on_save();
    let err = import(&store, REPORT, false).unwrap_err();
    assert!(err.to_string().contains("Mock store save failure"));
}

#[test]
fn test_import_reports_progress() {
    let store = MockLedgerStore::new();
    let reporter = MockProgressReporter::new();
    let use_case = ImportReportUseCase::new(
        MockReportReader::new(
            "ServiceNumber,Partner Comp,ActivityType,Customer Name,TRN_DATE\n\
             ,$1.00,ACT,Nobody,2025-01-01\n\
             5551234,$1.00,ACT,Jane Doe,2025-01-01\n",
        ),
        store.clone(),
        reporter.clone(),
    );

    let response = use_case
        .execute(ImportRequest::new(PathBuf::from("report.csv"), false))
        .unwrap();

    assert_eq!(response.rows_skipped(), 1);
    let messages = reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m == "Progress: 1/1 - Recording transactions"));
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("Skipped CSV line 2"));
    assert!(messages.last().unwrap().starts_with("Completed: "));
}

#[test]
fn test_json_export_restores_same_ledger() {
    let dir = TempDir::new().unwrap();
    let source = MockLedgerStore::new();
    import(&source, REPORT, false).unwrap();
    import(&source, DEACT_REPORT, false).unwrap();

    let exported = ExportLedgerUseCase::new(source.clone(), Box::new(JsonExporter::new()))
        .execute()
        .unwrap();
    let snapshot_path = dir.path().join("snapshot.json");
    std::fs::write(&snapshot_path, &exported).unwrap();

    let target = std::sync::Arc::new(JsonFileStore::new(dir.path().join("restored.json")));
    let response = RestoreSnapshotUseCase::new(
        FileSystemReader::new(),
        target.clone(),
        MockProgressReporter::new(),
    )
    .execute(&snapshot_path)
    .unwrap();

    assert_eq!(response.lines_restored, 2);
    assert_eq!(response.transactions_restored, 4);
    assert_eq!(target.load().unwrap(), source.snapshot());
}

#[test]
fn test_restore_rejects_non_ledger_json() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("snapshot.json");
    std::fs::write(&snapshot_path, "[1, 2, 3]").unwrap();

    let store = MockLedgerStore::new();
    let err = RestoreSnapshotUseCase::new(
        FileSystemReader::new(),
        store.clone(),
        MockProgressReporter::new(),
    )
    .execute(&snapshot_path)
    .unwrap_err();

    assert!(err.to_string().contains("Failed to parse ledger snapshot"));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_csv_export_has_row_per_transaction() {
    let store = MockLedgerStore::new();
    import(&store, REPORT, false).unwrap();

    let csv = ExportLedgerUseCase::new(store, Box::new(CsvExporter::new()))
        .execute()
        .unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("5551234,Jane Doe,Unlimited Plus,Active,"));
}

#[test]
fn test_clear_declined_keeps_data() {
    let store = MockLedgerStore::new();
    import(&store, REPORT, false).unwrap();
    let prompt = MockConfirmationPrompt::answering(false);

    let outcome = ClearLedgerUseCase::new(store.clone(), prompt.clone(), MockProgressReporter::new())
        .execute(false)
        .unwrap();

    assert_eq!(outcome, ClearOutcome::Aborted);
    assert_eq!(prompt.questions.lock().unwrap()[0], CLEAR_CONFIRMATION_QUESTION);
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn test_clear_confirmed_empties_store() {
    let store = MockLedgerStore::new();
    import(&store, REPORT, false).unwrap();
    let prompt = MockConfirmationPrompt::answering(true);

    let outcome = ClearLedgerUseCase::new(store.clone(), prompt.clone(), MockProgressReporter::new())
        .execute(false)
        .unwrap();

    assert_eq!(
        outcome,
        ClearOutcome::Cleared {
            lines_removed: Some(2)
        }
    );
    assert_eq!(prompt.times_asked(), 1);
    assert!(QueryLedgerUseCase::new(store).lines(&LineFilter::all()).unwrap().is_empty());
}

#[test]
fn test_document_directory_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = std::sync::Arc::new(DocumentDirectoryStore::new(dir.path().join("lines")));
    let use_case = ImportReportUseCase::new(
        MockReportReader::new(REPORT),
        store.clone(),
        MockProgressReporter::new(),
    );
    use_case
        .execute(ImportRequest::new(PathBuf::from("report.csv"), false))
        .unwrap();

    assert!(Path::new(&dir.path().join("lines/5551234.json")).exists());
    let detail = QueryLedgerUseCase::new(store)
        .line_detail("5551234")
        .unwrap();
    assert_eq!(detail.line.customer_name, "Jane Doe");
    assert_eq!(detail.months.len(), 2);
}

#[test]
fn test_long_service_numbers_import_and_query() {
    let number = "9".repeat(70);
    let report = format!(
        "ServiceNumber,Partner Comp,ActivityType,ProdCatDescription,Customer Name,TRN_DATE\n\
         {n},$100.00,ACT,Unlimited Plus,Jane Doe,2025-01-15\n\
         {n},$25.50,RESIDUAL,Unlimited Plus,Jane Doe,2025-02-01\n",
        n = number
    );
    let dir = TempDir::new().unwrap();
    let store = std::sync::Arc::new(DocumentDirectoryStore::new(dir.path().join("lines")));
    let use_case = ImportReportUseCase::new(
        MockReportReader::new(&report),
        store.clone(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(ImportRequest::new(PathBuf::from("report.csv"), false))
        .unwrap();
    assert_eq!(response.rows_skipped(), 0);

    let query = QueryLedgerUseCase::new(store);
    assert_eq!(query.summary().unwrap().total_lines, 1);
    let detail = query.line_detail(&number).unwrap();
    assert_eq!(detail.line.service_number, number);
    assert_eq!(detail.months.len(), 2);
}

#[test]
fn test_oversized_compensation_rejects_import() {
    let store = MockLedgerStore::new();
    let report = "\
ServiceNumber,Partner Comp,ActivityType,ProdCatDescription,Customer Name,TRN_DATE
5551234,\"$79,228,162,514,264,337,593,543,950,335\",ACT,Unlimited Plus,Jane Doe,2025-01-15
5551234,\"$79,228,162,514,264,337,593,543,950,335\",RESIDUAL,Unlimited Plus,Jane Doe,2025-02-01
";

    let err = import(&store, report, false).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::MalformedAmount { line: 2, .. })
    ));
    assert!(store.load().unwrap().is_empty());
}
