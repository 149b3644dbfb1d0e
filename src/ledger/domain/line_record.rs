use super::transaction::{ActivityType, Transaction};
use rust_decimal::Decimal;

/// Whether a line is still earning commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStatus {
    Active,
    Inactive,
}

impl LineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStatus::Active => "Active",
            LineStatus::Inactive => "Inactive",
        }
    }
}

impl std::str::FromStr for LineStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(LineStatus::Active),
            "inactive" => Ok(LineStatus::Inactive),
            _ => Err(format!(
                "Invalid status: {}. Please specify 'active' or 'inactive'",
                s
            )),
        }
    }
}

impl std::fmt::Display for LineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// LineRecord aggregates every transaction seen for one service number.
///
/// Customer, plan and activation date are fixed when the line is opened;
/// afterwards only the history grows. Status is derived from the history:
/// a line is `Inactive` once any deactivation has been recorded, and no
/// later activity reactivates it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    customer_name: String,
    plan: String,
    activation_date: String,
    history: Vec<Transaction>,
}

impl LineRecord {
    /// Opens a line from the first transaction seen for it.
    ///
    /// The plan is the first transaction's description when that transaction
    /// is an activation, and empty otherwise.
    pub fn open(customer_name: String, first: Transaction) -> Self {
        let plan = match first.activity_type() {
            ActivityType::Activation => first.description().to_string(),
            _ => String::new(),
        };
        let activation_date = first.date().to_string();

        Self {
            customer_name,
            plan,
            activation_date,
            history: vec![first],
        }
    }

    /// Rebuilds a line from stored parts
    pub fn from_parts(
        customer_name: String,
        plan: String,
        activation_date: String,
        history: Vec<Transaction>,
    ) -> Self {
        Self {
            customer_name,
            plan,
            activation_date,
            history,
        }
    }

    /// Appends a transaction to the history
    pub fn record(&mut self, transaction: Transaction) {
        self.history.push(transaction);
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn activation_date(&self) -> &str {
        &self.activation_date
    }

    /// Transactions in processing order
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn status(&self) -> LineStatus {
        let deactivated = self
            .history
            .iter()
            .any(|tx| matches!(tx.activity_type(), ActivityType::Deactivation));

        if deactivated {
            LineStatus::Inactive
        } else {
            LineStatus::Active
        }
    }

    /// Sum of all transaction amounts regardless of type
    pub fn total_amount(&self) -> Decimal {
        self.history.iter().map(Transaction::amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(cents: i64, code: &str, description: &str, date: &str) -> Transaction {
        Transaction::new(
            Decimal::new(cents, 2),
            ActivityType::from_code(code),
            description.to_string(),
            date.to_string(),
        )
    }

    #[test]
    fn test_open_from_activation_sets_plan() {
        let line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(10000, "ACT", "Unlimited Plus", "2025-01-15"),
        );

        assert_eq!(line.customer_name(), "Jane Doe");
        assert_eq!(line.plan(), "Unlimited Plus");
        assert_eq!(line.activation_date(), "2025-01-15");
        assert_eq!(line.status(), LineStatus::Active);
        assert_eq!(line.history().len(), 1);
    }

    #[test]
    fn test_open_from_residual_leaves_plan_empty() {
        let line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(2550, "RESIDUAL", "Unlimited Plus", "2025-02-01"),
        );

        assert_eq!(line.plan(), "");
        assert_eq!(line.activation_date(), "2025-02-01");
    }

    #[test]
    fn test_open_from_deactivation_is_inactive() {
        let line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(-1000, "DEACT", "", "2025-02-01"),
        );
        assert_eq!(line.status(), LineStatus::Inactive);
    }

    #[test]
    fn test_record_deactivation_flips_status() {
        let mut line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(10000, "ACT", "Unlimited Plus", "2025-01-15"),
        );
        line.record(tx(-1000, "DEACT", "", "2025-03-02"));

        assert_eq!(line.status(), LineStatus::Inactive);
    }

    #[test]
    fn test_activation_after_deactivation_does_not_reactivate() {
        let mut line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(10000, "ACT", "Unlimited Plus", "2025-01-15"),
        );
        line.record(tx(-1000, "DEACT", "", "2025-03-02"));
        line.record(tx(10000, "ACT", "Unlimited Plus", "2025-04-01"));

        assert_eq!(line.status(), LineStatus::Inactive);
    }

    #[test]
    fn test_later_rows_do_not_change_plan_or_activation_date() {
        let mut line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(10000, "ACT", "Unlimited Plus", "2025-01-15"),
        );
        line.record(tx(5000, "ACT", "Basic", "2025-05-01"));

        assert_eq!(line.plan(), "Unlimited Plus");
        assert_eq!(line.activation_date(), "2025-01-15");
        assert_eq!(line.history().len(), 2);
    }

    #[test]
    fn test_history_keeps_processing_order() {
        let mut line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(2550, "RESIDUAL", "", "2025-03-01"),
        );
        line.record(tx(10000, "ACT", "", "2025-01-15"));

        let dates: Vec<&str> = line.history().iter().map(|t| t.date()).collect();
        assert_eq!(dates, vec!["2025-03-01", "2025-01-15"]);
    }

    #[test]
    fn test_total_amount() {
        let mut line = LineRecord::open(
            "Jane Doe".to_string(),
            tx(10000, "ACT", "", "2025-01-15"),
        );
        line.record(tx(2550, "RESIDUAL", "", "2025-02-01"));
        line.record(tx(-1000, "DEACT", "", "2025-03-01"));

        assert_eq!(line.total_amount(), Decimal::new(11550, 2));
    }

    #[test]
    fn test_line_status_from_str() {
        assert_eq!("active".parse::<LineStatus>().unwrap(), LineStatus::Active);
        assert_eq!(
            "INACTIVE".parse::<LineStatus>().unwrap(),
            LineStatus::Inactive
        );
        assert!("closed".parse::<LineStatus>().is_err());
    }
}
