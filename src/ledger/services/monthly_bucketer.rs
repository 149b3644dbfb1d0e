use crate::ledger::domain::{ActivityType, Ledger, LineRecord, Transaction};
use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Bucket key for transactions whose date is empty
pub const UNKNOWN_MONTH: &str = "unknown";

/// Commission totals for one calendar month across the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// `YYYY-MM` key
    pub month: String,
    pub upfront: Decimal,
    pub monthly: Decimal,
    pub chargeback: Decimal,
}

impl MonthlyBucket {
    fn empty(month: String) -> Self {
        Self {
            month,
            upfront: Decimal::ZERO,
            monthly: Decimal::ZERO,
            chargeback: Decimal::ZERO,
        }
    }
}

/// One month of a single line's history
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    pub month: String,
    pub transactions: Vec<&'a Transaction>,
}

impl MonthGroup<'_> {
    pub fn total(&self) -> Decimal {
        self.transactions.iter().map(|tx| tx.amount()).sum()
    }
}

/// MonthlyBucketer groups transactions by the year-month of their date.
pub struct MonthlyBucketer;

impl MonthlyBucketer {
    /// Sums upfront, residual and chargeback amounts per month, oldest first
    pub fn bucket(ledger: &Ledger) -> Vec<MonthlyBucket> {
        let mut buckets: BTreeMap<String, MonthlyBucket> = BTreeMap::new();

        for (_, line) in ledger.lines() {
            for tx in line.history() {
                let key = month_key(tx.date());
                let bucket = buckets
                    .entry(key.clone())
                    .or_insert_with(|| MonthlyBucket::empty(key));
                match tx.activity_type() {
                    ActivityType::Activation => bucket.upfront += tx.amount(),
                    ActivityType::Residual => bucket.monthly += tx.amount(),
                    ActivityType::Deactivation => bucket.chargeback += tx.amount(),
                    ActivityType::Other(_) => {}
                }
            }
        }

        buckets.into_values().collect()
    }

    /// Groups one line's transactions by month, oldest first. Within a month
    /// transactions keep their processing order.
    pub fn group_line(line: &LineRecord) -> Vec<MonthGroup<'_>> {
        let mut groups: BTreeMap<String, Vec<&Transaction>> = BTreeMap::new();

        for tx in line.history() {
            groups.entry(month_key(tx.date())).or_default().push(tx);
        }

        groups
            .into_iter()
            .map(|(month, transactions)| MonthGroup {
                month,
                transactions,
            })
            .collect()
    }
}

/// Truncates a transaction date to a `YYYY-MM` key.
///
/// Recognizes `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, `MM/DD/YY` and RFC 3339
/// timestamps. Other non-empty dates fall back to their first seven
/// characters without any calendar validation.
pub fn month_key(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() {
        return UNKNOWN_MONTH.to_string();
    }

    match parse_date(date) {
        Some(parsed) => parsed.format("%Y-%m").to_string(),
        None => date.chars().take(7).collect(),
    }
}

/// Human label for a month key (`2025-03` is `March 2025`)
pub fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d")
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Some(timestamp.date_naive());
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(date, format) {
            return Some(parsed);
        }
    }

    // %Y would read a two-digit year literally, so pick the format by width
    let year_width = date.rsplit('/').next().map(str::len).unwrap_or_default();
    let format = if year_width == 2 { "%m/%d/%y" } else { "%m/%d/%Y" };
    NaiveDate::parse_from_str(date, format).ok()
}
