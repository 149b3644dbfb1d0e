use crate::adapters::outbound::formatters::format_currency;
use crate::application::read_models::{
    LedgerReadModelBuilder, LedgerSummaryView, LineView, MonthlyBucketView,
};
use crate::ledger::domain::{Ledger, ReportMetadata};
use crate::ledger::services::{KpiCalculator, MonthlyBucketer, ReportMetadataGenerator};
use crate::ports::outbound::LedgerExporter;
use crate::shared::Result;

/// Markdown table header for the line list
const LINE_TABLE_HEADER: &str =
    "| Service Number | Customer | Plan | Status | Activated | Transactions | Total |\n";

/// Markdown table separator line for the line list
const LINE_TABLE_SEPARATOR: &str =
    "|----------------|----------|------|--------|-----------|-------------:|------:|\n";

const MONTHLY_TABLE_HEADER: &str = "| Month | Upfront | Monthly | Chargebacks |\n";

const MONTHLY_TABLE_SEPARATOR: &str = "|-------|--------:|--------:|------------:|\n";

/// MarkdownExporter renders the printable commission report
///
/// Each export is stamped with a generation timestamp and a report id.
pub struct MarkdownExporter {
    metadata: Option<ReportMetadata>,
}

impl MarkdownExporter {
    pub fn new() -> Self {
        Self { metadata: None }
    }

    /// Uses fixed metadata instead of generating it at export time
    pub fn with_metadata(metadata: ReportMetadata) -> Self {
        Self {
            metadata: Some(metadata),
        }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownExporter {
    fn render_header(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str("# Commission Report\n\n");
        output.push_str(&format!("- **Generated:** {}\n", metadata.timestamp()));
        output.push_str(&format!("- **Report ID:** {}\n", metadata.report_id()));
        output.push_str(&format!(
            "- **Tool:** {} {}\n\n",
            metadata.tool_name(),
            metadata.tool_version()
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &LedgerSummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|------:|\n");

        let rows = [
            ("Upfront (ACT)", format_currency(summary.upfront)),
            ("Monthly (RESIDUAL)", format_currency(summary.monthly)),
            ("Chargebacks (DEACT)", format_currency(summary.chargeback)),
            ("Total commission", format_currency(summary.total_commission)),
            (
                "Average per line",
                format_currency(summary.average_commission_per_line),
            ),
            ("Active lines", summary.active_lines.to_string()),
            ("Total lines", summary.total_lines.to_string()),
        ];
        for (metric, value) in rows {
            output.push_str(&format!("| {} | {} |\n", metric, value));
        }
        output.push('\n');
    }

    fn render_lines(&self, output: &mut String, lines: &[LineView]) {
        output.push_str("## Lines\n\n");
        if lines.is_empty() {
            output.push_str("No lines recorded.\n\n");
            return;
        }

        output.push_str(LINE_TABLE_HEADER);
        output.push_str(LINE_TABLE_SEPARATOR);
        for line in lines {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&line.service_number),
                Self::escape_markdown_table_cell(&line.customer_name),
                Self::escape_markdown_table_cell(&line.plan),
                line.status,
                Self::escape_markdown_table_cell(&line.activation_date),
                line.transaction_count,
                format_currency(line.total_commission)
            ));
        }
        output.push('\n');
    }

    fn render_monthly(&self, output: &mut String, buckets: &[MonthlyBucketView]) {
        output.push_str("## Monthly Totals\n\n");
        if buckets.is_empty() {
            output.push_str("No transactions recorded.\n");
            return;
        }

        output.push_str(MONTHLY_TABLE_HEADER);
        output.push_str(MONTHLY_TABLE_SEPARATOR);
        for bucket in buckets {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&bucket.label),
                format_currency(bucket.upfront),
                format_currency(bucket.monthly),
                format_currency(bucket.chargeback)
            ));
        }
    }
}

impl LedgerExporter for MarkdownExporter {
    fn export(&self, ledger: &Ledger) -> Result<String> {
        let metadata = self
            .metadata
            .clone()
            .unwrap_or_else(ReportMetadataGenerator::generate_default_metadata);

        let summary = LedgerReadModelBuilder::build_summary(&KpiCalculator::calculate(ledger));
        let lines: Vec<LineView> = ledger
            .lines()
            .map(|(number, line)| LedgerReadModelBuilder::build_line(number, line))
            .collect();
        let monthly = LedgerReadModelBuilder::build_monthly(&MonthlyBucketer::bucket(ledger));

        let mut output = String::new();
        self.render_header(&mut output, &metadata);
        self.render_summary(&mut output, &summary);
        self.render_lines(&mut output, &lines);
        self.render_monthly(&mut output, &monthly);

        Ok(output)
    }
}
