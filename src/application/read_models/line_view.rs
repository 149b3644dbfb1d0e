//! Line view structs for read model
//!
//! These structs provide a flattened, query-optimized view of line records.

use rust_decimal::Decimal;
use serde::Serialize;

/// One row of the line list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineView {
    pub service_number: String,
    pub customer_name: String,
    pub plan: String,
    /// `Active` or `Inactive`
    pub status: String,
    pub activation_date: String,
    pub transaction_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_commission: Decimal,
}

/// A line with its history grouped by month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDetailView {
    #[serde(flatten)]
    pub line: LineView,
    pub months: Vec<MonthGroupView>,
}

/// One month of a line's history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroupView {
    /// `YYYY-MM` key
    pub month: String,
    /// Human label such as `March 2025`
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub transactions: Vec<TransactionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub date: String,
}
