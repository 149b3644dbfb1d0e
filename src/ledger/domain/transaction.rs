use rust_decimal::Decimal;

/// Largest compensation magnitude a single transaction may carry ($1,000,000,000).
///
/// Totals add every amount in the ledger, so each one stays far below the
/// range of `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Whether `amount` fits within [`MAX_AMOUNT`] in either direction
pub fn amount_in_range(amount: Decimal) -> bool {
    amount.abs() <= MAX_AMOUNT
}

/// Commission activity codes found in carrier reports.
///
/// Codes outside the known vocabulary are carried through unchanged in
/// `Other` so that exports reproduce what the carrier sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActivityType {
    /// Activation commission (upfront)
    Activation,
    /// Recurring residual commission (monthly)
    Residual,
    /// Deactivation chargeback
    Deactivation,
    Other(String),
}

impl ActivityType {
    /// Maps a raw activity code to a type. Only the exact codes `ACT`,
    /// `RESIDUAL` and `DEACT` are known; anything else, including `act` or
    /// `" ACT"`, is kept verbatim as `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ACT" => ActivityType::Activation,
            "RESIDUAL" => ActivityType::Residual,
            "DEACT" => ActivityType::Deactivation,
            other => ActivityType::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ActivityType::Activation => "ACT",
            ActivityType::Residual => "RESIDUAL",
            ActivityType::Deactivation => "DEACT",
            ActivityType::Other(code) => code,
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single commission transaction recorded against a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: Decimal,
    activity_type: ActivityType,
    description: String,
    date: String,
}

impl Transaction {
    pub fn new(
        amount: Decimal,
        activity_type: ActivityType,
        description: String,
        date: String,
    ) -> Self {
        Self {
            amount,
            activity_type,
            description,
            date,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn activity_type(&self) -> &ActivityType {
        &self.activity_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The transaction date exactly as it appeared in the report
    pub fn date(&self) -> &str {
        &self.date
    }
}
