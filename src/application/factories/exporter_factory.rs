use crate::adapters::outbound::exporters::{CsvExporter, JsonExporter, MarkdownExporter};
use crate::application::dto::ExportFormat;
use crate::ports::outbound::LedgerExporter;

/// Factory for creating ledger exporters
///
/// This factory encapsulates the creation logic for the exporter
/// implementations, selecting an infrastructure adapter per export format.
pub struct ExporterFactory;

impl ExporterFactory {
    /// Creates an exporter instance for the specified format
    ///
    /// # Examples
    /// ```
    /// use commission_ledger::application::dto::ExportFormat;
    /// use commission_ledger::application::factories::ExporterFactory;
    ///
    /// let exporter = ExporterFactory::create(ExportFormat::Csv);
    /// ```
    pub fn create(format: ExportFormat) -> Box<dyn LedgerExporter> {
        match format {
            ExportFormat::Csv => Box::new(CsvExporter::new()),
            ExportFormat::Json => Box::new(JsonExporter::new()),
            ExportFormat::Markdown => Box::new(MarkdownExporter::new()),
        }
    }

    /// Returns the progress message for the specified format
    ///
    /// # Examples
    /// ```
    /// use commission_ledger::application::dto::ExportFormat;
    /// use commission_ledger::application::factories::ExporterFactory;
    ///
    /// let message = ExporterFactory::progress_message(ExportFormat::Json);
    /// assert_eq!(message, "📝 Exporting ledger as JSON...");
    /// ```
    pub fn progress_message(format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Csv => "📝 Exporting ledger as CSV...",
            ExportFormat::Json => "📝 Exporting ledger as JSON...",
            ExportFormat::Markdown => "📝 Exporting ledger as a Markdown report...",
        }
    }
}
