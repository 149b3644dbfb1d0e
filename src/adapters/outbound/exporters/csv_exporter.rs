use crate::ledger::domain::Ledger;
use crate::ports::outbound::LedgerExporter;
use crate::shared::Result;
use anyhow::Context;

/// Header row of the CSV export
pub const CSV_HEADERS: [&str; 9] = [
    "ServiceNumber",
    "CustomerName",
    "Plan",
    "Status",
    "ActivationDate",
    "TransactionDate",
    "Type",
    "Description",
    "Amount",
];

/// CsvExporter writes one row per transaction, lines in service-number order
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerExporter for CsvExporter {
    fn export(&self, ledger: &Ledger) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;

        for (service_number, line) in ledger.lines() {
            let status = line.status();
            for tx in line.history() {
                let amount = tx.amount().to_string();
                writer.write_record([
                    service_number.as_str(),
                    line.customer_name(),
                    line.plan(),
                    status.as_str(),
                    line.activation_date(),
                    tx.date(),
                    tx.activity_type().code(),
                    tx.description(),
                    amount.as_str(),
                ])?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV export: {}", e))?;
        String::from_utf8(bytes).context("CSV export is not valid UTF-8")
    }
}
