//! Builder for constructing read models from domain objects
//!
//! This module transforms the ledger and the results of the domain
//! services into the query-optimized views.

use super::line_view::{LineDetailView, LineView, MonthGroupView, TransactionView};
use super::monthly_view::MonthlyBucketView;
use super::summary_view::LedgerSummaryView;
use crate::ledger::domain::{LineRecord, ServiceNumber, Transaction};
use crate::ledger::services::{month_label, Kpis, MonthGroup, MonthlyBucket};

/// Builder for constructing ledger views from domain objects
pub struct LedgerReadModelBuilder;

impl LedgerReadModelBuilder {
    pub fn build_summary(kpis: &Kpis) -> LedgerSummaryView {
        LedgerSummaryView {
            upfront: kpis.upfront,
            monthly: kpis.monthly,
            chargeback: kpis.chargeback,
            active_lines: kpis.active_lines,
            inactive_lines: kpis.inactive_lines(),
            total_lines: kpis.total_lines,
            total_commission: kpis.total_commission,
            average_commission_per_line: kpis.average_commission_per_line(),
        }
    }

    pub fn build_line(service_number: &ServiceNumber, line: &LineRecord) -> LineView {
        LineView {
            service_number: service_number.to_string(),
            customer_name: line.customer_name().to_string(),
            plan: line.plan().to_string(),
            status: line.status().as_str().to_string(),
            activation_date: line.activation_date().to_string(),
            transaction_count: line.history().len(),
            total_commission: line.total_amount(),
        }
    }

    /// Builds the detail view from a line and its month groups
    pub fn build_line_detail(
        service_number: &ServiceNumber,
        line: &LineRecord,
        groups: &[MonthGroup<'_>],
    ) -> LineDetailView {
        let months = groups
            .iter()
            .map(|group| MonthGroupView {
                month: group.month.clone(),
                label: month_label(&group.month),
                total: group.total(),
                transactions: group
                    .transactions
                    .iter()
                    .map(|tx| Self::build_transaction(tx))
                    .collect(),
            })
            .collect();

        LineDetailView {
            line: Self::build_line(service_number, line),
            months,
        }
    }

    pub fn build_monthly(buckets: &[MonthlyBucket]) -> Vec<MonthlyBucketView> {
        buckets
            .iter()
            .map(|bucket| MonthlyBucketView {
                month: bucket.month.clone(),
                label: month_label(&bucket.month),
                upfront: bucket.upfront,
                monthly: bucket.monthly,
                chargeback: bucket.chargeback,
            })
            .collect()
    }

    fn build_transaction(tx: &Transaction) -> TransactionView {
        TransactionView {
            amount: tx.amount(),
            activity_type: tx.activity_type().code().to_string(),
            description: tx.description().to_string(),
            date: tx.date().to_string(),
        }
    }
}
