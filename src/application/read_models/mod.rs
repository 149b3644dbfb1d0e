//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the ledger for queries.
//! Amounts serialize as JSON numbers.

mod ledger_read_model_builder;
mod line_view;
mod monthly_view;
mod summary_view;

pub use ledger_read_model_builder::LedgerReadModelBuilder;
pub use line_view::{LineDetailView, LineView, MonthGroupView, TransactionView};
pub use monthly_view::MonthlyBucketView;
pub use summary_view::LedgerSummaryView;
