use crate::application::read_models::{
    LedgerReadModelBuilder, LedgerSummaryView, LineDetailView, LineView, MonthlyBucketView,
};
use crate::ledger::domain::Ledger;
use crate::ledger::services::{KpiCalculator, LineFilter, MonthlyBucketer};
use crate::ports::inbound::LedgerQueryPort;
use crate::ports::outbound::LedgerStore;
use crate::shared::error::LedgerError;
use crate::shared::Result;

/// QueryLedgerUseCase answers the read-side queries.
///
/// Nothing is cached: every query loads the ledger from the store and
/// recomputes its view.
pub struct QueryLedgerUseCase<S> {
    ledger_store: S,
}

impl<S: LedgerStore> QueryLedgerUseCase<S> {
    pub fn new(ledger_store: S) -> Self {
        Self { ledger_store }
    }

    fn load(&self) -> Result<Ledger> {
        self.ledger_store.load()
    }
}

impl<S: LedgerStore> LedgerQueryPort for QueryLedgerUseCase<S> {
    fn summary(&self) -> Result<LedgerSummaryView> {
        let ledger = self.load()?;
        Ok(LedgerReadModelBuilder::build_summary(
            &KpiCalculator::calculate(&ledger),
        ))
    }

    fn lines(&self, filter: &LineFilter) -> Result<Vec<LineView>> {
        let ledger = self.load()?;
        Ok(filter
            .apply(&ledger)
            .into_iter()
            .map(|(number, line)| LedgerReadModelBuilder::build_line(number, line))
            .collect())
    }

    fn line_detail(&self, service_number: &str) -> Result<LineDetailView> {
        let ledger = self.load()?;
        let key = service_number.trim();
        let (number, line) = ledger
            .entry(key)
            .ok_or_else(|| LedgerError::LineNotFound {
                service_number: key.to_string(),
            })?;

        let groups = MonthlyBucketer::group_line(line);
        Ok(LedgerReadModelBuilder::build_line_detail(number, line, &groups))
    }

    fn monthly(&self) -> Result<Vec<MonthlyBucketView>> {
        let ledger = self.load()?;
        Ok(LedgerReadModelBuilder::build_monthly(
            &MonthlyBucketer::bucket(&ledger),
        ))
    }
}
