//! JSON document shape shared by the JSON export and every ledger store.
//!
//! A ledger is an object keyed by service number whose values are line
//! documents:
//!
//! ```json
//! { "5551234": { "customerName": "Jane Doe", "plan": "Unlimited Plus",
//!                "status": "Active", "activationDate": "2025-01-15",
//!                "history": [ { "amount": "100.00", "type": "ACT",
//!                               "description": "Unlimited Plus",
//!                               "date": "2025-01-15" } ] } }
//! ```
//!
//! Amounts are written as decimal strings and accepted as strings or numbers.

use crate::ledger::domain::{
    amount_in_range, ActivityType, Ledger, LineRecord, ServiceNumber, Transaction,
};
use crate::shared::error::LedgerError;
use crate::shared::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stored form of one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDocument {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub plan: String,
    /// Written for readers of the raw document; ignored on load
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub activation_date: String,
    #[serde(default)]
    pub history: Vec<TransactionDocument>,
}

/// Stored form of one transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDocument {
    pub amount: Decimal,
    #[serde(rename = "type", default)]
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

/// Documents keyed by service number, in service-number order
pub type LedgerDocuments = BTreeMap<String, LineDocument>;

impl From<&LineRecord> for LineDocument {
    fn from(line: &LineRecord) -> Self {
        Self {
            customer_name: line.customer_name().to_string(),
            plan: line.plan().to_string(),
            status: line.status().as_str().to_string(),
            activation_date: line.activation_date().to_string(),
            history: line.history().iter().map(TransactionDocument::from).collect(),
        }
    }
}

impl From<&Transaction> for TransactionDocument {
    fn from(tx: &Transaction) -> Self {
        Self {
            amount: tx.amount(),
            activity_type: tx.activity_type().code().to_string(),
            description: tx.description().to_string(),
            date: tx.date().to_string(),
        }
    }
}

impl LineDocument {
    /// Converts the document back into a line record. Status is recomputed
    /// from the history.
    pub fn into_line(self, service_number: &ServiceNumber) -> LineRecord {
        let history = self
            .history
            .into_iter()
            .map(|tx| {
                Transaction::new(
                    tx.amount,
                    ActivityType::from_code(&tx.activity_type),
                    tx.description,
                    tx.date,
                )
            })
            .collect();

        let line = LineRecord::from_parts(self.customer_name, self.plan, self.activation_date, history);

        if !self.status.is_empty() && !self.status.eq_ignore_ascii_case(line.status().as_str()) {
            log::warn!(
                "Stored status '{}' for {} disagrees with its history; using '{}'",
                self.status,
                service_number,
                line.status()
            );
        }

        line
    }
}

pub fn to_documents(ledger: &Ledger) -> LedgerDocuments {
    ledger
        .lines()
        .map(|(number, line)| (number.to_string(), LineDocument::from(line)))
        .collect()
}

/// Rebuilds a ledger from documents keyed by service number.
///
/// Keys are trimmed. A blank key, two keys that trim to the same service
/// number, or an amount beyond `MAX_AMOUNT` rejects the whole load.
pub fn from_documents(documents: LedgerDocuments) -> Result<Ledger> {
    let mut ledger = Ledger::new();
    for (key, document) in documents {
        let service_number = ServiceNumber::new(&key)?;
        if ledger.contains(service_number.as_str()) {
            return Err(LedgerError::Validation {
                message: format!(
                    "Duplicate service number '{}': more than one stored key trims to it",
                    service_number
                ),
            }
            .into());
        }

        if let Some(tx) = document.history.iter().find(|tx| !amount_in_range(tx.amount)) {
            return Err(LedgerError::Validation {
                message: format!(
                    "Stored amount {} for service number '{}' is outside the supported range",
                    tx.amount, service_number
                ),
            }
            .into());
        }

        let line = document.into_line(&service_number);
        ledger.insert(service_number, line);
    }
    Ok(ledger)
}

/// Serializes the ledger as a pretty-printed JSON object
pub fn encode_ledger(ledger: &Ledger) -> Result<String> {
    let json = serde_json::to_string_pretty(&to_documents(ledger))?;
    Ok(json)
}

/// Parses a JSON ledger dump. Blank input is an empty ledger.
pub fn decode_ledger(content: &str) -> Result<Ledger> {
    if content.trim().is_empty() {
        return Ok(Ledger::new());
    }

    let documents: LedgerDocuments =
        serde_json::from_str(content).map_err(|e| LedgerError::Validation {
            message: format!("Not a ledger JSON document: {}", e),
        })?;
    from_documents(documents)
}
