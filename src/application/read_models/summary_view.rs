//! KPI summary view

use rust_decimal::Decimal;
use serde::Serialize;

/// View representation of the ledger KPIs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummaryView {
    /// Sum of activation commissions
    #[serde(with = "rust_decimal::serde::float")]
    pub upfront: Decimal,
    /// Sum of residual commissions
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly: Decimal,
    /// Sum of deactivation chargebacks
    #[serde(with = "rust_decimal::serde::float")]
    pub chargeback: Decimal,
    pub active_lines: usize,
    pub inactive_lines: usize,
    pub total_lines: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_commission: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_commission_per_line: Decimal,
}
