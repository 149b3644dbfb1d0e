use super::report_parser::{parse_compensation, ReportRow};
use crate::ledger::domain::{
    ActivityType, Ledger, LedgerEntry, RecordOutcome, ServiceNumber, Transaction,
};
use crate::shared::error::LedgerError;
use crate::shared::Result;
use std::collections::HashSet;

/// A report row that was left out of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Entries ready to merge, plus the rows that were skipped
#[derive(Debug, Clone)]
pub struct PreparedRows {
    pub entries: Vec<LedgerEntry>,
    pub skipped: Vec<SkippedRow>,
}

/// Counts describing one merge into the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub lines_opened: usize,
    /// Lines that already existed before the merge and received transactions
    pub lines_updated: usize,
    pub transactions_recorded: usize,
}

/// LedgerAggregator folds report rows into the ledger.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Converts rows into ledger entries.
    ///
    /// Rows with a blank service number are skipped. A compensation value
    /// that is not a number, or whose magnitude exceeds `MAX_AMOUNT`, fails the whole batch so that a bad report never
    /// leaves a partially merged ledger behind.
    pub fn prepare(rows: Vec<ReportRow>) -> Result<PreparedRows> {
        let mut entries = Vec::with_capacity(rows.len());
        let mut skipped = Vec::new();

        for row in rows {
            let service_number = match ServiceNumber::new(&row.service_number) {
                Ok(number) => number,
                Err(e) => {
                    skipped.push(SkippedRow {
                        line: row.line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let amount = parse_compensation(&row.partner_comp).ok_or_else(|| {
                LedgerError::MalformedAmount {
                    line: row.line,
                    service_number: service_number.to_string(),
                    value: row.partner_comp.clone(),
                }
            })?;

            let transaction = Transaction::new(
                amount,
                ActivityType::from_code(&row.activity_type),
                row.description,
                row.date,
            );

            entries.push(LedgerEntry {
                service_number,
                customer_name: row.customer_name,
                transaction,
            });
        }

        Ok(PreparedRows { entries, skipped })
    }

    /// Merges entries into the ledger in order.
    ///
    /// `on_progress` is called after each entry with `(recorded, total)`.
    pub fn merge<F>(ledger: &mut Ledger, entries: Vec<LedgerEntry>, mut on_progress: F) -> MergeSummary
    where
        F: FnMut(usize, usize),
    {
        let total = entries.len();
        let mut opened: HashSet<ServiceNumber> = HashSet::new();
        let mut updated: HashSet<ServiceNumber> = HashSet::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let service_number = entry.service_number.clone();
            match ledger.record(entry) {
                RecordOutcome::Opened => {
                    opened.insert(service_number);
                }
                RecordOutcome::Appended => {
                    if !opened.contains(&service_number) {
                        updated.insert(service_number);
                    }
                }
            }
            on_progress(index + 1, total);
        }

        MergeSummary {
            lines_opened: opened.len(),
            lines_updated: updated.len(),
            transactions_recorded: total,
        }
    }
}
