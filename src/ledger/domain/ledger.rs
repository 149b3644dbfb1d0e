use super::line_record::LineRecord;
use super::service_number::ServiceNumber;
use super::transaction::Transaction;
use std::collections::BTreeMap;

/// One parsed report row, ready to be merged into the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub service_number: ServiceNumber,
    pub customer_name: String,
    pub transaction: Transaction,
}

/// What happened to the ledger when an entry was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new line record was opened
    Opened,
    /// The transaction was appended to an existing line
    Appended,
}

/// Ledger maps each service number to its line record.
///
/// Lines are kept sorted by service number so every view and export is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    lines: BTreeMap<ServiceNumber, LineRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one entry: opens a line on first sight of the service number,
    /// otherwise appends the transaction to the existing history.
    pub fn record(&mut self, entry: LedgerEntry) -> RecordOutcome {
        match self.lines.get_mut(&entry.service_number) {
            Some(line) => {
                line.record(entry.transaction);
                RecordOutcome::Appended
            }
            None => {
                let line = LineRecord::open(entry.customer_name, entry.transaction);
                self.lines.insert(entry.service_number, line);
                RecordOutcome::Opened
            }
        }
    }

    /// Inserts or replaces a whole line record
    pub fn insert(&mut self, service_number: ServiceNumber, line: LineRecord) {
        self.lines.insert(service_number, line);
    }

    pub fn get(&self, service_number: &str) -> Option<&LineRecord> {
        self.lines.get(service_number)
    }

    /// Looks up a line together with its stored key
    pub fn entry(&self, service_number: &str) -> Option<(&ServiceNumber, &LineRecord)> {
        self.lines.get_key_value(service_number)
    }

    pub fn contains(&self, service_number: &str) -> bool {
        self.lines.contains_key(service_number)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&ServiceNumber, &LineRecord)> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of transactions across all lines
    pub fn transaction_count(&self) -> usize {
        self.lines.values().map(|line| line.history().len()).sum()
    }
}
