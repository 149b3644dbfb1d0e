/// Ledger exporters (CSV, JSON dump, Markdown report)
mod csv_exporter;
mod json_exporter;
mod markdown_exporter;

pub use csv_exporter::CsvExporter;
pub use json_exporter::JsonExporter;
pub use markdown_exporter::MarkdownExporter;
