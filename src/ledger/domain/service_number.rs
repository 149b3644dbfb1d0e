use crate::shared::error::LedgerError;
use crate::shared::Result;
use std::borrow::Borrow;

/// NewType wrapper for the service number (MDN) that keys a line record.
///
/// The only normalization applied is trimming surrounding whitespace. Any
/// non-blank text is accepted, whatever its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceNumber(String);

impl ServiceNumber {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(LedgerError::Validation {
                message: "Service number cannot be blank".to_string(),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ServiceNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServiceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
