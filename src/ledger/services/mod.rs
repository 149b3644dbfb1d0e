mod kpi_calculator;
mod ledger_aggregator;
mod line_filter;
mod monthly_bucketer;
mod report_metadata_generator;
mod report_parser;

pub use kpi_calculator::{KpiCalculator, Kpis};
pub use ledger_aggregator::{LedgerAggregator, MergeSummary, PreparedRows, SkippedRow};
pub use line_filter::LineFilter;
pub use monthly_bucketer::{
    month_key, month_label, MonthGroup, MonthlyBucket, MonthlyBucketer, UNKNOWN_MONTH,
};
pub use report_metadata_generator::ReportMetadataGenerator;
pub use report_parser::{parse_compensation, ReportParser, ReportRow};
