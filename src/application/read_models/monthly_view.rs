use rust_decimal::Decimal;
use serde::Serialize;

/// Commission totals for one month, the time series behind the dashboard chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucketView {
    pub month: String,
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub upfront: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub chargeback: Decimal,
}
