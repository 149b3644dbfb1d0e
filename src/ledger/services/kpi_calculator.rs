use crate::ledger::domain::{ActivityType, Ledger, LineStatus};
use rust_decimal::Decimal;

/// Summary totals over the whole ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kpis {
    /// Sum of activation (ACT) amounts
    pub upfront: Decimal,
    /// Sum of residual (RESIDUAL) amounts
    pub monthly: Decimal,
    /// Sum of deactivation (DEACT) amounts
    pub chargeback: Decimal,
    pub active_lines: usize,
    pub total_lines: usize,
    /// Sum of every amount, whatever its type
    pub total_commission: Decimal,
}

impl Kpis {
    /// Average commission per line, rounded to cents. Zero for an empty ledger.
    pub fn average_commission_per_line(&self) -> Decimal {
        if self.total_lines == 0 {
            return Decimal::ZERO;
        }
        (self.total_commission / Decimal::from(self.total_lines)).round_dp(2)
    }

    pub fn inactive_lines(&self) -> usize {
        self.total_lines - self.active_lines
    }
}

/// KpiCalculator computes the ledger KPIs in a single pass.
pub struct KpiCalculator;

impl KpiCalculator {
    pub fn calculate(ledger: &Ledger) -> Kpis {
        let mut kpis = Kpis::default();

        for (_, line) in ledger.lines() {
            kpis.total_lines += 1;
            if line.status() == LineStatus::Active {
                kpis.active_lines += 1;
            }

            for tx in line.history() {
                kpis.total_commission += tx.amount();
                match tx.activity_type() {
                    ActivityType::Activation => kpis.upfront += tx.amount(),
                    ActivityType::Residual => kpis.monthly += tx.amount(),
                    ActivityType::Deactivation => kpis.chargeback += tx.amount(),
                    ActivityType::Other(_) => {}
                }
            }
        }

        kpis
    }
}
